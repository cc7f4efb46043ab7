//! Pseudo-legal move generation, dispatched on piece kind.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// An ordered collection of generated moves.
///
/// Membership uses [`Move`] equality, so `contains` ignores the move kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if a move equal to `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Return the listed move equal to `mv`, carrying its kind and auxiliary square.
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.moves.iter().copied().find(|m| m == mv)
    }

    /// Keep only the moves for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    /// Iterate over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generate the pseudo-legal moves of `piece` standing on `pos`.
pub(crate) fn piece_moves(piece: Piece, board: &Board, pos: Position) -> MoveList {
    let mut list = MoveList::new();
    let us = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, pos, us, &mut list),
        PieceKind::Knight => gen_knight(board, pos, us, &mut list),
        PieceKind::Bishop => gen_slider(board, pos, us, &BISHOP_DIRECTIONS, 7, &mut list),
        PieceKind::Rook => gen_slider(board, pos, us, &ROOK_DIRECTIONS, 7, &mut list),
        PieceKind::Queen => gen_slider(board, pos, us, &QUEEN_DIRECTIONS, 7, &mut list),
        PieceKind::King => gen_king(board, pos, us, &mut list),
    }
    list
}

/// Return `true` if any piece of `by_color` has a pseudo-legal capture ending on `target`.
///
/// Straight pawn pushes never attack. Pawn diagonals are only generated onto
/// enemy pieces, so probe an empty square by placing a piece on it first.
pub(crate) fn is_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == by_color)
        .any(|(pos, piece)| {
            piece_moves(piece, board, pos).iter().any(|mv| {
                mv.end() == target
                    && !(piece.kind() == PieceKind::Pawn && mv.start().file() == mv.end().file())
            })
        })
}
