//! Ray-walking generation shared by bishops, rooks, queens, and the king.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::MoveList;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each direction from `from` for at most `max_steps` squares.
///
/// Empty squares yield a move and the walk continues; an enemy piece yields
/// a capture and ends the ray; a friendly piece or the board edge ends the
/// ray with no move.
pub(super) fn gen_slider(
    board: &Board,
    from: Position,
    us: Color,
    directions: &[(i8, i8)],
    max_steps: u8,
    list: &mut MoveList,
) {
    for &(df, dr) in directions {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(next) = current.offset(df, dr) else {
                break;
            };
            match board.color_on(next) {
                None => list.push(Move::new(from, next)),
                Some(color) if color != us => {
                    list.push(Move::new(from, next));
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }
}
