//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::MoveList;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate knight jumps onto squares not held by a friendly piece.
pub(super) fn gen_knight(board: &Board, from: Position, us: Color, list: &mut MoveList) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(df, dr)
            && board.color_on(to) != Some(us)
        {
            list.push(Move::new(from, to));
        }
    }
}
