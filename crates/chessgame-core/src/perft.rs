//! Perft (performance test) for move generation correctness verification.

use crate::game::Game;

/// Count the leaf nodes of the legal move tree to `depth` plies.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.all_valid_moves(game.side_to_move());

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|mv| {
            let mut child = game.clone();
            child.make_move(*mv).ok()?;
            Some(perft(&child, depth - 1))
        })
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let moves = game.all_valid_moves(game.side_to_move());
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .filter_map(|mv| {
            let mut child = game.clone();
            child.make_move(*mv).ok()?;
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
