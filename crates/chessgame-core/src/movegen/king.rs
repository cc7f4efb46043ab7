//! Single-step king moves. Castling needs game state and is added by [`Game`](crate::Game).

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

use super::MoveList;
use super::sliders::{QUEEN_DIRECTIONS, gen_slider};

/// Generate the king's one-square moves in all eight directions.
pub(super) fn gen_king(board: &Board, from: Position, us: Color, list: &mut MoveList) {
    gen_slider(board, from, us, &QUEEN_DIRECTIONS, 1, list);
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::piece_moves;
    use crate::piece::Piece;
    use crate::position::Position;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn king_in_center_has_eight_steps() {
        let mut board = Board::empty();
        board.set_piece(sq("e4"), Some(Piece::WHITE_KING));
        assert_eq!(piece_moves(Piece::WHITE_KING, &board, sq("e4")).len(), 8);
    }

    #[test]
    fn king_captures_enemy_but_not_friend() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Some(Piece::WHITE_KING));
        board.set_piece(sq("a2"), Some(Piece::WHITE_PAWN));
        board.set_piece(sq("b2"), Some(Piece::BLACK_PAWN));
        let moves = piece_moves(Piece::WHITE_KING, &board, sq("a1"));
        let mut ends: Vec<String> = moves.iter().map(|m| m.end().to_string()).collect();
        ends.sort();
        assert_eq!(ends, vec!["b1", "b2"]);
    }

    #[test]
    fn king_never_generates_castling() {
        let mut board = Board::empty();
        board.set_piece(sq("e1"), Some(Piece::WHITE_KING));
        board.set_piece(sq("h1"), Some(Piece::WHITE_ROOK));
        let moves = piece_moves(Piece::WHITE_KING, &board, sq("e1"));
        assert!(moves.iter().all(|m| !m.is_castle()));
        assert!(moves.iter().all(|m| m.end() != sq("g1")));
    }
}
