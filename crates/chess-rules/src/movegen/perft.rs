//! Perft: leaf counts of the legal move tree.
//!
//! The counts from the start position are published, so they pin down the
//! generator and the king-safety filter together. Positions whose trees
//! reach castling or en passant give different numbers here, since this rule
//! set has neither.

use super::make_move;
use crate::legal::legal_moves_for;
use crate::Position;

/// Counts the positions reachable in exactly `depth` plies.
pub fn perft(position: &Position, depth: u32) -> u64 {
    match depth {
        0 => 1,
        1 => legal_moves_for(position, position.side_to_move).len() as u64,
        _ => legal_moves_for(position, position.side_to_move)
            .into_iter()
            .map(|m| perft(&make_move(position, m), depth - 1))
            .sum(),
    }
}

/// Splits [`perft`] by root move, as `(uci, count)` pairs sorted by move text.
///
/// A depth of 0 or 1 counts each root move once.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves_for(position, position.side_to_move)
        .into_iter()
        .map(|m| {
            let below = depth.saturating_sub(1);
            (m.to_uci(), perft(&make_move(position, m), below))
        })
        .collect();
    results.sort();
    results
}
