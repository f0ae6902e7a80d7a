//! Game controller.
//!
//! The [`Game`] struct owns one [`Position`] and is the only place moves are
//! committed. Queries never touch the live position: legality probing runs on
//! scratch copies.

use crate::config::{ConfigError, GameConfig};
use crate::movegen::play_move;
use crate::rules::{GameStatus, RuleSet, StandardChess};
use crate::snapshot::GameSnapshot;
use crate::{MoveList, Position};
use chess_core::{Color, FenError, Move, Piece, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    /// The move as played.
    #[serde(with = "crate::snapshot::uci_move")]
    pub mov: Move,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The piece removed from the destination square, if any.
    pub captured: Option<Piece>,
}

/// Why [`Game::make_move`] refused a move.
///
/// The game is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece at {square}")]
    NoPiece { square: Square },

    #[error("wrong turn: it is not {color}'s move")]
    WrongTurn { color: Color },

    #[error("move {mv} is not allowed")]
    NotAllowed { mv: Move },

    #[error("unparsable move: {0:?}")]
    Unparsable(String),
}

/// A chess game: one position, White to move first, and the moves played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    moves: Vec<GameMove>,
    record_history: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardChess.initial_position())
    }

    /// Creates a game from an arbitrary position.
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            moves: Vec::new(),
            record_history: true,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Creates a game as described by `config`.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut game = Self::from_position(config.initial_position()?);
        game.record_history = config.record_history;
        Ok(game)
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Replaces the whole position, side to move included.
    ///
    /// The move history no longer describes the new position and is cleared.
    pub fn set_position(&mut self, position: Position) {
        debug!(fen = %position.to_fen(), "position replaced");
        self.position = position;
        self.moves.clear();
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, color: Color) {
        self.position.side_to_move = color;
    }

    /// Returns the legal moves of the piece on `square`, whichever side owns
    /// it, or `None` if the square is empty.
    pub fn valid_moves(&self, square: Square) -> Option<MoveList> {
        StandardChess.legal_moves_from(&self.position, square)
    }

    /// Returns all legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        StandardChess.legal_moves(&self.position)
    }

    /// Plays `m` for the side to move.
    ///
    /// Fails with [`IllegalMove::NoPiece`] if the start square is empty,
    /// [`IllegalMove::WrongTurn`] if the piece belongs to the other side, and
    /// [`IllegalMove::NotAllowed`] if the move is not among
    /// [`valid_moves`](Game::valid_moves) of its start square.
    pub fn make_move(&mut self, m: Move) -> Result<(), IllegalMove> {
        let piece = match self.check_move(m) {
            Ok(piece) => piece,
            Err(err) => {
                debug!(mv = %m, %err, "move rejected");
                return Err(err);
            }
        };

        let captured = play_move(&mut self.position, m);
        debug!(mv = %m, piece = %piece, "move played");

        if self.record_history {
            self.moves.push(GameMove {
                mov: m,
                piece,
                captured,
            });
        }
        Ok(())
    }

    fn check_move(&self, m: Move) -> Result<Piece, IllegalMove> {
        let piece = self
            .position
            .piece_at(m.from())
            .ok_or(IllegalMove::NoPiece { square: m.from() })?;

        if piece.color != self.turn() {
            return Err(IllegalMove::WrongTurn { color: piece.color });
        }

        if !StandardChess.is_legal(&self.position, m) {
            return Err(IllegalMove::NotAllowed { mv: m });
        }

        Ok(piece)
    }

    /// Makes a move given in UCI notation.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<(), IllegalMove> {
        let m = Move::from_uci(uci).ok_or_else(|| IllegalMove::Unparsable(uci.to_string()))?;
        self.make_move(m)
    }

    /// Returns true if `color`'s king is attacked. False if it has no king.
    pub fn is_in_check(&self, color: Color) -> bool {
        StandardChess.is_check(&self.position, color)
    }

    /// Returns true if `color` is in check with no escaping move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        StandardChess.is_checkmate(&self.position, color)
    }

    /// Returns true if `color` is not in check but has no move that keeps its
    /// king safe.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        StandardChess.is_stalemate(&self.position, color)
    }

    /// Returns the status for the side to move.
    pub fn status(&self) -> GameStatus {
        StandardChess.status(&self.position)
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of recorded half-moves.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Captures the board, side to move and history for storage.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.position.placement(),
            turn: self.turn(),
            history: self.moves.clone(),
            record_history: self.record_history,
        }
    }

    /// Rebuilds a game from a stored snapshot.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, FenError> {
        let position = snapshot.position()?;
        Ok(Game {
            position,
            moves: snapshot.history.clone(),
            record_history: snapshot.record_history,
        })
    }
}
