//! Legality filtering and check detection.
//!
//! A pseudo-legal move is legal when, after playing it, the mover's king is
//! not attacked. Moves are tried with a [`Simulation`] on a scratch copy of
//! the position; the simulation undoes itself when dropped, so the scratch
//! copy is restored on every exit path, unwinding included.

use crate::movegen::{pseudo_legal_moves, pseudo_legal_moves_for, MoveList};
use crate::Position;
use chess_core::{Color, Move, Piece, PieceKind, Square};
use std::ops::Deref;
use tracing::trace;

/// A move temporarily applied to a position.
///
/// Applying relocates the piece and clears the start square; promotion is not
/// applied, since the promoted kind cannot change whether the mover's own king
/// is attacked. Dropping the value puts both squares back.
pub struct Simulation<'a> {
    position: &'a mut Position,
    mv: Move,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Plays `mv` on `position` until the returned guard is dropped.
    pub fn apply(position: &'a mut Position, mv: Move) -> Self {
        let moved = position.set_piece(mv.from(), None);
        let captured = position.set_piece(mv.to(), moved);
        Simulation {
            position,
            mv,
            moved,
            captured,
        }
    }

    /// The piece that was on the start square.
    pub fn moved(&self) -> Option<Piece> {
        self.moved
    }

    /// The piece that was on the destination square.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl Deref for Simulation<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.position.set_piece(self.mv.to(), self.captured);
        self.position.set_piece(self.mv.from(), self.moved);
    }
}

/// Returns true if some piece of color `by` has a pseudo-legal move ending on
/// `target`.
pub fn is_square_attacked(position: &Position, target: Square, by: Color) -> bool {
    position
        .pieces_of(by)
        .any(|(sq, _)| pseudo_legal_moves(position, sq).into_iter().any(|m| m.to() == target))
}

/// Returns true if `color`'s king is attacked.
///
/// A side without a king on the board is never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.king_square(color) {
        Some(king) => is_square_attacked(position, king, color.opposite()),
        None => false,
    }
}

/// Decides whether the pseudo-legal move `mv` keeps the mover's king safe.
///
/// `scratch` is mutated while the move is tried and is identical to its input
/// state when this returns. A king move must also not land on a square the
/// opponent attacks.
pub fn keeps_king_safe(scratch: &mut Position, mv: Move) -> bool {
    let sim = Simulation::apply(scratch, mv);
    let Some(piece) = sim.moved() else {
        return false;
    };
    if is_in_check(&sim, piece.color) {
        return false;
    }
    !(piece.kind == PieceKind::King && is_square_attacked(&sim, mv.to(), piece.color.opposite()))
}

/// Returns the legal moves of the piece on `from`, or `None` if the square is
/// empty.
pub fn legal_moves_from(position: &Position, from: Square) -> Option<MoveList> {
    position.piece_at(from)?;

    let mut scratch = position.clone();
    let mut moves = pseudo_legal_moves(position, from);
    moves.retain(|&m| {
        let legal = keeps_king_safe(&mut scratch, m);
        if !legal {
            trace!(mv = %m, "rejected: leaves king in check");
        }
        legal
    });
    Some(moves)
}

/// Returns every legal move of `color`, scanning from a1 row by row.
pub fn legal_moves_for(position: &Position, color: Color) -> MoveList {
    let mut scratch = position.clone();
    let mut moves = pseudo_legal_moves_for(position, color);
    moves.retain(|&m| keeps_king_safe(&mut scratch, m));
    moves
}

/// Returns true if some pseudo-legal move of `color` leaves its king out of
/// check. Stops at the first such move.
pub fn has_escape(position: &Position, color: Color) -> bool {
    let mut scratch = position.clone();
    pseudo_legal_moves_for(position, color).into_iter().any(|m| {
        let sim = Simulation::apply(&mut scratch, m);
        !is_in_check(&sim, color)
    })
}

/// `color` is in check and no move gets its king out of check.
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_in_check(position, color) && !has_escape(position, color)
}

/// `color` is not in check, yet every move it has would leave its king in
/// check (including having no moves at all).
pub fn is_stalemate(position: &Position, color: Color) -> bool {
    !is_in_check(position, color) && !has_escape(position, color)
}
