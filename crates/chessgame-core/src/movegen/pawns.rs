//! Pawn pushes, double pushes, captures, and promotions.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;

/// Push `from -> to`, expanded into one move per promotion kind on the last rank.
fn push_pawn_move(from: Position, to: Position, us: Color, list: &mut MoveList) {
    if to.rank() == us.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::new_promotion(from, to, kind));
        }
    } else {
        list.push(Move::new(from, to));
    }
}

/// Generate pseudo-legal pawn moves. En passant is added by the game.
pub(super) fn gen_pawn(board: &Board, from: Position, us: Color, list: &mut MoveList) {
    let forward = us.forward();

    if let Some(single) = from.offset(0, forward)
        && !board.is_occupied(single)
    {
        push_pawn_move(from, single, us, list);

        if from.rank() == us.pawn_rank()
            && let Some(double) = single.offset(0, forward)
            && !board.is_occupied(double)
        {
            list.push(Move::new(from, double));
        }
    }

    for df in [-1, 1] {
        if let Some(target) = from.offset(df, forward)
            && board.color_on(target) == Some(us.flip())
        {
            push_pawn_move(from, target, us, list);
        }
    }
}
