//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam between the game
//! controller and the rules it enforces. [`StandardChess`] implements the
//! supported subset: every piece shape and promotion, without castling or en
//! passant.

mod standard;

pub use standard::StandardChess;

use crate::{MoveList, Position};
use chess_core::{Color, Move, Square};
use serde::{Deserialize, Serialize};

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum GameStatus {
    /// The side to move has a legal move and is not in check.
    Ongoing,
    /// The side to move is in check but can escape.
    Check,
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// The side to move is not in check and cannot move without exposing
    /// its king.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Trait for the rules the game controller delegates to.
///
/// # Example
///
/// ```
/// use chess_rules::rules::RuleSet;
/// use chess_rules::StandardChess;
///
/// let position = StandardChess.initial_position();
/// let moves = StandardChess.legal_moves(&position);
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> Position;

    /// Returns the legal moves of the piece on `from`, or `None` if the
    /// square is empty.
    fn legal_moves_from(&self, position: &Position, from: Square) -> Option<MoveList>;

    /// Generates all legal moves for the side to move.
    fn legal_moves(&self, position: &Position) -> MoveList;

    /// Returns true if the given move is legal for the piece it moves.
    fn is_legal(&self, position: &Position, m: Move) -> bool {
        self.legal_moves_from(position, m.from())
            .is_some_and(|moves| moves.contains(&m))
    }

    /// Makes a move on the position, returning the new position.
    ///
    /// No legality check is performed. Use [`is_legal`](RuleSet::is_legal)
    /// to check first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, position: &Position, m: Move) -> Position;

    /// Attempts to make a move, returning `None` if illegal.
    fn try_make_move(&self, position: &Position, m: Move) -> Option<Position> {
        if self.is_legal(position, m) {
            Some(self.make_move(position, m))
        } else {
            None
        }
    }

    /// Returns true if `color`'s king is attacked.
    fn is_check(&self, position: &Position, color: Color) -> bool;

    /// Returns true if `color` is checkmated.
    fn is_checkmate(&self, position: &Position, color: Color) -> bool;

    /// Returns true if `color` is stalemated.
    fn is_stalemate(&self, position: &Position, color: Color) -> bool;

    /// Returns the status for the side to move.
    fn status(&self, position: &Position) -> GameStatus {
        let us = position.side_to_move;
        if self.is_checkmate(position, us) {
            GameStatus::Checkmate {
                winner: us.opposite(),
            }
        } else if self.is_check(position, us) {
            GameStatus::Check
        } else if self.is_stalemate(position, us) {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }
}
