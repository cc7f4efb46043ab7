//! The game state machine: legality filtering, special moves, and
//! check/checkmate/stalemate queries.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide, KING_FILE};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::{MoveList, is_attacked};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Terminal-state summary for the side to move, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Active,
    /// In check, with at least one legal move.
    Check,
    /// In check with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

/// A game in progress: the board plus the state needed for legal play.
///
/// Not synchronized; callers sharing a game across threads serialize
/// access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    /// Square of the pawn that double-advanced on the previous move.
    en_passant: Option<Position>,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game::from_parts(Board::starting_position(), Color::White, CastleRights::ALL, None)
    }

    /// Start a game from an arbitrary board.
    ///
    /// A castling right is granted wherever the king and that rook stand on
    /// their original squares. There is no en passant target.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        let mut castling = CastleRights::NONE;
        for color in Color::ALL {
            let king_home = Position::new(KING_FILE as i16, color.back_rank() as i16);
            if king_home.ok().and_then(|sq| board.get_piece(sq))
                != Some(Piece::new(color, PieceKind::King))
            {
                continue;
            }
            for side in CastleSide::ALL {
                let rook_home = Position::new(side.rook_file() as i16, color.back_rank() as i16);
                if rook_home.ok().and_then(|sq| board.get_piece(sq))
                    == Some(Piece::new(color, PieceKind::Rook))
                {
                    castling = castling.insert(CastleRights::flag(color, side));
                }
            }
        }
        Game::from_parts(board, side_to_move, castling, None)
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Position>,
    ) -> Game {
        Game {
            board,
            side_to_move,
            castling,
            en_passant,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Override whose turn it is.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the remaining castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square of the pawn that double-advanced on the previous move, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    /// Square that pawn skipped over, i.e. where an en passant capture lands.
    pub fn en_passant_square(&self) -> Option<Position> {
        let pawn = self.en_passant?;
        let color = self.board.color_on(pawn)?;
        pawn.offset(0, -color.forward())
    }

    /// Return `true` if `color`'s king is attacked on the current board.
    ///
    /// A board without a king for `color` is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        king_in_check(&self.board, color)
    }

    /// Legal moves of the piece on `pos`, or `None` if the square is empty.
    ///
    /// Works for either color regardless of whose turn it is.
    pub fn valid_moves(&self, pos: Position) -> Option<MoveList> {
        let piece = self.board.get_piece(pos)?;
        let mut moves = piece.pseudo_legal_moves(&self.board, pos);
        match piece.kind() {
            PieceKind::Pawn => self.add_en_passant(pos, piece, &mut moves),
            PieceKind::King => self.add_castling(pos, piece, &mut moves),
            _ => {}
        }

        let candidates = moves.len();
        moves.retain(|mv| !self.leaves_king_in_check(mv, piece.color()));
        trace!(square = %pos, candidates, legal = moves.len(), "filtered moves");
        Some(moves)
    }

    /// Legal moves of every piece of `color`.
    pub fn all_valid_moves(&self, color: Color) -> MoveList {
        self.board
            .occupants_of(color)
            .into_iter()
            .filter_map(|pos| self.valid_moves(pos))
            .flatten()
            .collect()
    }

    /// Apply `mv` if it is legal for the side to move.
    ///
    /// `mv` is matched against the legal moves by start, end, and promotion,
    /// so a plain move on the right squares performs en passant or castling.
    /// On error the game is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let (piece, legal) = self
            .validate(mv)
            .inspect_err(|err| debug!(%mv, error = %err, "move rejected"))?;

        play_on(&mut self.board, &legal);

        let (start, end) = (legal.start(), legal.end());
        self.castling = self
            .castling
            .remove(CastleRights::revoked_by(start))
            .remove(CastleRights::revoked_by(end));
        let double_advance =
            piece.kind() == PieceKind::Pawn && start.rank().abs_diff(end.rank()) == 2;
        self.en_passant = double_advance.then_some(end);
        self.side_to_move = self.side_to_move.flip();

        debug!(mv = %legal, kind = ?legal.kind(), next = %self.side_to_move, "move applied");
        Ok(())
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.all_valid_moves(color).is_empty()
    }

    /// Return `true` if it is `color`'s turn, `color` is not in check, and
    /// `color` has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        color == self.side_to_move
            && !self.is_in_check(color)
            && self.all_valid_moves(color).is_empty()
    }

    /// Summarize the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let us = self.side_to_move;
        let in_check = self.is_in_check(us);
        let stuck = self.all_valid_moves(us).is_empty();
        match (in_check, stuck) {
            (false, false) => GameStatus::Active,
            (true, false) => GameStatus::Check,
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
        }
    }

    /// Check a submitted move, returning the mover and the matching legal move.
    fn validate(&self, mv: Move) -> Result<(Piece, Move), MoveError> {
        let start = mv.start();
        let piece = self
            .board
            .get_piece(start)
            .ok_or(MoveError::NoPieceAtSource { square: start })?;
        let legal = self
            .valid_moves(start)
            .and_then(|moves| moves.find(&mv))
            .ok_or(MoveError::IllegalMove { mv })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::OutOfTurn {
                square: start,
                color: piece.color(),
            });
        }
        Ok((piece, legal))
    }

    /// Add the en passant capture if the previous move double-advanced an
    /// enemy pawn to a square beside `pos`.
    fn add_en_passant(&self, pos: Position, pawn: Piece, moves: &mut MoveList) {
        let Some(target) = self.en_passant else {
            return;
        };
        let enemy_pawn = Piece::new(pawn.color().flip(), PieceKind::Pawn);
        if target.rank() != pos.rank()
            || target.file().abs_diff(pos.file()) != 1
            || self.board.get_piece(target) != Some(enemy_pawn)
        {
            return;
        }
        if let Some(end) = target.offset(0, pawn.color().forward())
            && !self.board.is_occupied(end)
        {
            moves.push(Move::new_en_passant(pos, end, target));
        }
    }

    /// Add castling moves for a king on its home square.
    ///
    /// Requires the right to be intact, the rook in its corner, every square
    /// between them empty, and the king neither in check nor passing through
    /// or landing on an attacked square.
    fn add_castling(&self, pos: Position, king: Piece, moves: &mut MoveList) {
        let us = king.color();
        if pos.rank() != us.back_rank() || pos.file() != KING_FILE || self.is_in_check(us) {
            return;
        }

        let rook = Piece::new(us, PieceKind::Rook);
        for side in CastleSide::ALL {
            if !self.castling.has(us, side) {
                continue;
            }
            let Some(rook_home) = pos.with_file(side.rook_file()) else {
                continue;
            };
            if self.board.get_piece(rook_home) != Some(rook) {
                continue;
            }

            let (lo, hi) = (pos.file().min(rook_home.file()), pos.file().max(rook_home.file()));
            let path_clear = (lo + 1..hi)
                .filter_map(|file| pos.with_file(file))
                .all(|sq| !self.board.is_occupied(sq));
            if !path_clear {
                continue;
            }

            let dest_file = side.king_dest_file();
            let (walk_lo, walk_hi) = if dest_file > KING_FILE {
                (KING_FILE + 1, dest_file)
            } else {
                (dest_file, KING_FILE - 1)
            };
            let walk_safe = (walk_lo..=walk_hi)
                .filter_map(|file| pos.with_file(file))
                .all(|sq| {
                    let mut sim = self.board.clone();
                    sim.set_piece(pos, None);
                    sim.set_piece(sq, Some(king));
                    !king_in_check(&sim, us)
                });
            if walk_safe && let Some(dest) = pos.with_file(dest_file) {
                moves.push(Move::new_castle(pos, dest));
            }
        }
    }

    /// Simulate `mv` on a copy of the board and report whether `color`'s
    /// king is then attacked.
    fn leaves_king_in_check(&self, mv: &Move, color: Color) -> bool {
        let mut sim = self.board.clone();
        play_on(&mut sim, mv);
        king_in_check(&sim, color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_position_of(color)
        .is_some_and(|king| is_attacked(board, king, color.flip()))
}

/// Relocate the pieces `mv` moves on `board`: the mover (promoted if
/// requested), the en passant victim, and the castling rook.
fn play_on(board: &mut Board, mv: &Move) {
    let Some(piece) = board.get_piece(mv.start()) else {
        return;
    };
    let placed = mv
        .promotion()
        .map_or(piece, |kind| Piece::new(piece.color(), kind));

    match mv.kind() {
        MoveKind::Normal => {}
        MoveKind::EnPassant => {
            if let Some(captured) = mv.aux() {
                board.set_piece(captured, None);
            }
        }
        MoveKind::Castling => {
            if let Some(side) = CastleSide::from_king_dest_file(mv.end().file())
                && let Some(rook_from) = mv.start().with_file(side.rook_file())
                && let Some(rook_to) = mv.start().with_file(side.rook_dest_file())
            {
                let rook = board.get_piece(rook_from);
                board.set_piece(rook_from, None);
                board.set_piece(rook_to, rook);
            }
        }
    }

    board.set_piece(mv.start(), None);
    board.set_piece(mv.end(), Some(placed));
}
