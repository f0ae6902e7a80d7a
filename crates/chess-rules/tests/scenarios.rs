//! Integration tests for chess-rules: whole games through the public API.

use chess_core::{Color, Move, Piece, PieceKind, Promotion, Square};
use chess_rules::{Game, GameSnapshot, GameStatus, IllegalMove, Position};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for uci in moves {
        game.make_move_uci(uci)
            .unwrap_or_else(|e| panic!("{uci} rejected: {e}"));
    }
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert_eq!(game.turn(), Color::Black);
    assert!(game.is_in_check(Color::Black));
    assert!(game.is_in_checkmate(Color::Black));
    assert!(!game.is_in_stalemate(Color::Black));
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.ply_count(), 7);
    assert_eq!(
        game.move_history()[6].captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn test_no_moves_after_mate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    for (sq, piece) in game.position().pieces_of(Color::White) {
        let moves = game.valid_moves(sq).unwrap();
        assert!(moves.is_empty(), "{piece} on {sq} can still move");
    }
    assert!(matches!(
        game.make_move_uci("a2a3"),
        Err(IllegalMove::NotAllowed { .. })
    ));
}

#[test]
fn test_stalemate_via_set_position() {
    let mut game = Game::new();
    game.set_position(Position::from_fen("k7/2Q5/1K6/8/8/8/8/8 b").unwrap());
    assert!(!game.is_in_check(Color::Black));
    assert!(game.is_in_stalemate(Color::Black));
    assert!(!game.is_in_checkmate(Color::Black));
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.status().is_over());
}

#[test]
fn test_stalemate_reached_by_move() {
    let mut game = Game::from_fen("k7/8/1K6/8/8/8/8/2Q5 w").unwrap();
    assert!(!game.is_in_stalemate(Color::Black));
    game.make_move_uci("c1c7").unwrap();
    assert!(game.is_in_stalemate(Color::Black));
}

#[test]
fn test_every_promotion_choice() {
    for choice in Promotion::ALL {
        let mut game = Game::from_fen("7k/1P6/8/8/8/8/8/K7 w").unwrap();
        let moves = game.valid_moves(sq("b7")).unwrap();
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promotion().is_some()));

        game.make_move(Move::promoting(sq("b7"), sq("b8"), choice))
            .unwrap();
        assert_eq!(
            game.position().piece_at(sq("b8")),
            Some(Piece::new(Color::White, choice.kind()))
        );
    }
}

#[test]
fn test_black_promotes_on_first_row() {
    let mut game = Game::from_fen("7k/8/8/8/8/8/6p1/K7 b").unwrap();
    game.make_move_uci("g2g1n").unwrap();
    assert_eq!(
        game.position().piece_at(sq("g1")),
        Some(Piece::new(Color::Black, PieceKind::Knight))
    );
}

#[test]
fn test_rook_capture_stops_the_ray() {
    let game = Game::from_fen("4k3/3p4/8/8/3R4/8/8/4K3 w").unwrap();
    let moves = game.valid_moves(sq("d4")).unwrap();
    assert!(moves.contains(&Move::new(sq("d4"), sq("d7"))));
    assert!(!moves.contains(&Move::new(sq("d4"), sq("d8"))));
    assert_eq!(moves.len(), 3 + 3 + 3 + 4);
}

#[test]
fn test_blocked_pawn_has_no_moves() {
    let game = Game::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w").unwrap();
    assert!(game.valid_moves(sq("e2")).unwrap().is_empty());
}

#[test]
fn test_double_step_needs_clear_path() {
    let game = Game::from_fen("4k3/8/8/8/8/4n3/3P4/4K3 w").unwrap();
    let moves = game.valid_moves(sq("d2")).unwrap();
    assert!(moves.contains(&Move::new(sq("d2"), sq("d4"))));
    assert!(moves.contains(&Move::new(sq("d2"), sq("e3"))));

    let blocked = Game::from_fen("4k3/8/8/8/3n4/8/3P4/4K3 w").unwrap();
    let moves = blocked.valid_moves(sq("d2")).unwrap();
    assert_eq!(moves.len(), 1);
    assert!(moves.contains(&Move::new(sq("d2"), sq("d3"))));
}

#[test]
fn test_failed_move_leaves_game_untouched() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5"]);
    let before = game.clone();

    assert!(game.make_move_uci("e4e5").is_err());
    assert!(game.make_move_uci("e5e4").is_err());
    assert!(game.make_move_uci("d4d5").is_err());
    assert!(game.make_move_uci("nonsense").is_err());

    assert_eq!(game, before);
}

#[test]
fn test_queries_do_not_change_position() {
    let game = Game::from_fen("k5rq/8/8/8/8/8/1R6/7K w").unwrap();
    let before = game.position().clone();
    let _ = game.legal_moves();
    let _ = game.is_in_checkmate(Color::White);
    let _ = game.is_in_stalemate(Color::Black);
    for s in Square::all() {
        let _ = game.valid_moves(s);
    }
    assert_eq!(game.position(), &before);
}

#[test]
fn test_snapshot_json_roundtrip() {
    let mut game = Game::new();
    play(&mut game, &["d2d4", "g8f6", "c2c4", "e7e6"]);

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();
    let mut restored = Game::restore(&snapshot).unwrap();

    assert_eq!(restored, game);
    restored.make_move_uci("b1c3").unwrap();
    assert_eq!(restored.ply_count(), 5);
}

#[test]
fn test_status_serializes_tagged() {
    let json = serde_json::to_string(&GameStatus::Checkmate {
        winner: Color::Black,
    })
    .unwrap();
    assert_eq!(json, r#"{"status":"checkmate","winner":"black"}"#);
    let json = serde_json::to_string(&GameStatus::Ongoing).unwrap();
    assert_eq!(json, r#"{"status":"ongoing"}"#);
}
