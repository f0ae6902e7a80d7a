//! Pawn move generation.
//!
//! Pawns are the one piece whose moves depend on color and on what occupies
//! the target square, so they bypass the vector tables.

use super::MoveList;
use crate::Position;
use chess_core::{Color, Move, Promotion, Square};

/// Appends the pseudo-legal moves of a `color` pawn standing on `from`.
pub(super) fn generate(position: &Position, from: Square, color: Color, moves: &mut MoveList) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if position.piece_at(one).is_none() {
            push(moves, from, one, color);

            // Both the passed-over and the landing square must be empty.
            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if position.piece_at(two).is_none() {
                        push(moves, from, two, color);
                    }
                }
            }
        }
    }

    for d_col in [1, -1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if matches!(position.piece_at(to), Some(target) if target.color != color) {
            push(moves, from, to, color);
        }
    }
}

/// Pushes a pawn move, expanding it into all four promotions on the last row.
fn push(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    if to.row() == color.promotion_row() {
        for promotion in Promotion::ALL {
            moves.push(Move::promoting(from, to, promotion));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
