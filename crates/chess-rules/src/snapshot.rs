//! Storable game state.
//!
//! [`GameSnapshot`] is what a hosting service writes to its data store: the
//! board as a FEN placement field, the side to move, and the moves played.
//! Any serde format works; the tests use JSON.

use crate::game::GameMove;
use crate::Position;
use chess_core::{Color, FenError};
use serde::{Deserialize, Serialize};

/// Serialized form of a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// FEN piece placement, rank 8 first.
    pub board: String,
    /// Side to move.
    pub turn: Color,
    /// Moves played so far, oldest first.
    #[serde(default)]
    pub history: Vec<GameMove>,
    /// Whether the restored game keeps recording moves.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_record_history() -> bool {
    true
}

impl GameSnapshot {
    /// Rebuilds the position described by `board` and `turn`.
    pub fn position(&self) -> Result<Position, FenError> {
        Position::from_fen(&format!("{} {}", self.board, self.turn.to_fen_char()))
    }
}

/// Serde adapter writing a [`Move`](chess_core::Move) as its UCI string.
pub(crate) mod uci_move {
    use chess_core::Move;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(m: &Move, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&m.to_uci())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Move, D::Error> {
        let s = String::deserialize(deserializer)?;
        Move::from_uci(&s).ok_or_else(|| D::Error::custom(format!("invalid UCI move: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn json_shape() {
        let mut game = Game::new();
        game.make_move_uci("e2e4").unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["board"], "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
        assert_eq!(json["turn"], "black");
        assert_eq!(json["history"][0]["mov"], "e2e4");
        assert_eq!(json["history"][0]["piece"]["kind"], "pawn");
        assert!(json["history"][0]["captured"].is_null());
    }

    #[test]
    fn json_roundtrip_preserves_game() {
        let mut game = Game::new();
        for uci in ["e2e4", "d7d5", "e4d5", "d8d5"] {
            game.make_move_uci(uci).unwrap();
        }
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();
        let restored = Game::restore(&snapshot).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.turn(), Color::White);
        assert!(restored.move_history()[2].captured.is_some());
    }

    #[test]
    fn history_is_optional() {
        let snapshot: GameSnapshot =
            serde_json::from_str(r#"{"board":"8/8/8/8/8/8/8/K6k","turn":"white"}"#).unwrap();
        assert!(snapshot.history.is_empty());
        assert!(snapshot.record_history);
        let game = Game::restore(&snapshot).unwrap();
        assert_eq!(game.position().occupied_count(), 2);
    }

    #[test]
    fn bad_history_move_is_rejected() {
        let json = r#"{"board":"8/8/8/8/8/8/8/K6k","turn":"white",
            "history":[{"mov":"zz99","piece":{"color":"white","kind":"king"},"captured":null}]}"#;
        assert!(serde_json::from_str::<GameSnapshot>(json).is_err());
    }

    #[test]
    fn bad_board_is_rejected() {
        let snapshot = GameSnapshot {
            board: "8/8/8".to_string(),
            turn: Color::White,
            history: Vec::new(),
            record_history: true,
        };
        assert!(matches!(
            Game::restore(&snapshot),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }
}
