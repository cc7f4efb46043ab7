//! The 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement: exactly one optional [`Piece`] per square.
///
/// `Clone` produces a fully independent copy, which is what move
/// simulation mutates. Occupant lists and king squares are derived by
/// scanning on every call and never cached.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Return a board holding the standard 32-piece starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset_standard();
        board
    }

    /// Clear the board and place the standard starting layout.
    pub fn reset_standard(&mut self) {
        self.squares = [None; 64];
        for color in Color::ALL {
            for (file, kind) in (1u8..=8).zip(BACK_RANK) {
                self.place(file, color.back_rank(), Piece::new(color, kind));
                self.place(file, color.pawn_rank(), Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    fn place(&mut self, file: u8, rank: u8, piece: Piece) {
        self.squares[(rank as usize - 1) * 8 + (file as usize - 1)] = Some(piece);
    }

    /// Return the piece on `pos`, if any.
    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    /// Put `piece` on `pos`, replacing whatever stood there; `None` empties the square.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    /// Return `true` if a piece stands on `pos`.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get_piece(pos).is_some()
    }

    /// Return the color of the piece on `pos`, if any.
    #[inline]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.get_piece(pos).map(Piece::color)
    }

    /// Iterate over every occupied square and its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }

    /// Squares occupied by `color`, in a1..h8 scan order.
    pub fn occupants_of(&self, color: Color) -> Vec<Position> {
        self.pieces()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Square of `color`'s king, or `None` on a board without one.
    pub fn king_position_of(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(pos, _)| pos)
    }

    /// Snapshot of the grid as `rows[rank - 1][file - 1]`, rank 1 first.
    pub fn snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        let mut rows = [[None; 8]; 8];
        for (pos, piece) in self.pieces() {
            rows[pos.rank() as usize - 1][pos.file() as usize - 1] = Some(piece);
        }
        rows
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement_fen())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.snapshot();
        for (rank_idx, row) in rows.iter().enumerate().rev() {
            write!(f, "{}  ", rank_idx + 1)?;
            for (file_idx, square) in row.iter().enumerate() {
                let c = square.map_or('.', Piece::fen_char);
                if file_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.get_piece(sq("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.get_piece(sq("d1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.get_piece(sq("a1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.get_piece(sq("b8")), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.get_piece(sq("f8")), Some(Piece::BLACK_BISHOP));
        assert_eq!(board.get_piece(sq("e7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.get_piece(sq("e4")), None);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn occupants_and_kings() {
        let board = Board::starting_position();
        let white = board.occupants_of(Color::White);
        assert_eq!(white.len(), 16);
        assert!(white.iter().all(|p| p.rank() <= 2));
        assert_eq!(board.king_position_of(Color::White), Some(sq("e1")));
        assert_eq!(board.king_position_of(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_position_of(Color::White), None);
    }

    #[test]
    fn derived_queries_track_mutation() {
        let mut board = Board::starting_position();
        board.set_piece(sq("e1"), None);
        board.set_piece(sq("g3"), Some(Piece::WHITE_KING));
        assert_eq!(board.king_position_of(Color::White), Some(sq("g3")));
        assert!(board.occupants_of(Color::White).contains(&sq("g3")));
        assert!(!board.occupants_of(Color::White).contains(&sq("e1")));
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::starting_position();
        let mut copy = original.clone();
        copy.set_piece(sq("e2"), None);
        copy.set_piece(sq("e4"), Some(Piece::WHITE_PAWN));
        assert_eq!(original.get_piece(sq("e2")), Some(Piece::WHITE_PAWN));
        assert_eq!(original.get_piece(sq("e4")), None);
        assert_ne!(original, copy);
    }

    #[test]
    fn reset_restores_layout() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Some(Piece::BLACK_QUEEN));
        board.reset_standard();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn snapshot_orientation() {
        let rows = Board::starting_position().snapshot();
        assert_eq!(rows[0][4], Some(Piece::WHITE_KING));
        assert_eq!(rows[7][3], Some(Piece::BLACK_QUEEN));
        assert_eq!(rows[3][3], None);
    }

    #[test]
    fn pretty_print() {
        let text = Board::starting_position().pretty().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
