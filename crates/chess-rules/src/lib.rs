//! Chess rules engine with a mailbox board representation.
//!
//! This crate provides:
//! - [`Position`] - The 64 squares plus the side to move
//! - [`Game`] - Move validation, check, checkmate and stalemate queries
//! - [`RuleSet`] - Trait the game controller delegates to
//! - Pseudo-legal move generation and the king-safety filter
//! - [`GameSnapshot`] and [`GameConfig`] for storing and starting games
//!
//! # Architecture
//!
//! Pieces live in a 64-entry array indexed by square. Sliding and stepping
//! pieces share one vector-walking generator; pawns have their own. A
//! candidate move is checked by playing it on a scratch copy of the position
//! under a [`Simulation`] guard, which puts both touched squares back when it
//! goes out of scope.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_rules::{Game, StandardChess};
//! use chess_rules::rules::RuleSet;
//!
//! // Using Position directly (stateless)
//! let position = StandardChess.initial_position();
//! assert_eq!(StandardChess.legal_moves(&position).len(), 20);
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! assert_eq!(game.valid_moves(e2).unwrap().len(), 2);
//! game.make_move_uci("e2e4").unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(!game.is_in_check(Color::Black));
//! ```

mod config;
mod game;
pub mod legal;
pub mod movegen;
mod position;
pub mod rules;
mod snapshot;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameMove, IllegalMove};
pub use legal::{
    is_checkmate, is_in_check, is_square_attacked, is_stalemate, legal_moves_for,
    legal_moves_from, Simulation,
};
pub use movegen::{make_move, play_move, pseudo_legal_moves, pseudo_legal_moves_for, MoveList};
pub use position::Position;
pub use rules::{GameStatus, RuleSet, StandardChess};
pub use snapshot::GameSnapshot;
