//! Standard chess rules, without castling and en passant.

use super::RuleSet;
use crate::{legal, movegen, MoveList, Position};
use chess_core::{Color, Move, Square};

/// The default rule set:
/// - Standard piece movement, pawn double step from the start row
/// - Pawn promotion to queen, rook, bishop or knight
/// - Check, checkmate, and stalemate detection
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn legal_moves_from(&self, position: &Position, from: Square) -> Option<MoveList> {
        legal::legal_moves_from(position, from)
    }

    fn legal_moves(&self, position: &Position) -> MoveList {
        legal::legal_moves_for(position, position.side_to_move)
    }

    fn make_move(&self, position: &Position, m: Move) -> Position {
        movegen::make_move(position, m)
    }

    fn is_check(&self, position: &Position, color: Color) -> bool {
        legal::is_in_check(position, color)
    }

    fn is_checkmate(&self, position: &Position, color: Color) -> bool {
        legal::is_checkmate(position, color)
    }

    fn is_stalemate(&self, position: &Position, color: Color) -> bool {
        legal::is_stalemate(position, color)
    }
}
