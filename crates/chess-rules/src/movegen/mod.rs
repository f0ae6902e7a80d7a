//! Pseudo-legal move generation.
//!
//! Moves produced here respect piece shape, board edges and blocking, but may
//! still leave the mover's own king in check. The [`legal`](crate::legal)
//! module filters them.

mod pawn;
pub mod perft;
mod rays;

use crate::Position;
use chess_core::{Color, Move, Piece, PieceKind, Square};

pub use rays::Shape;

/// A growable list of moves.
///
/// Positions handed in through `set_position` are arbitrary, so the list is
/// heap-backed rather than capped at the legal-chess maximum.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Typical upper bound for a single side, used as initial capacity.
    pub const TYPICAL_MAX: usize = 64;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::TYPICAL_MAX),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if the list holds `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the pseudo-legal moves of the piece on `from`.
///
/// Returns an empty list if the square is empty.
pub fn pseudo_legal_moves(position: &Position, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    generate_into(position, from, &mut moves);
    moves
}

/// Generates the pseudo-legal moves of every piece of `color`, scanning the
/// board from a1 row by row.
pub fn pseudo_legal_moves_for(position: &Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (sq, _) in position.pieces_of(color) {
        generate_into(position, sq, &mut moves);
    }
    moves
}

/// Commits `m` to `position` without any legality check.
///
/// The piece on the start square moves to the end square; if the move carries
/// a promotion and the piece is a pawn, it becomes a piece of the promotion
/// kind. The side to move flips. Returns the captured piece, if any.
pub fn play_move(position: &mut Position, m: Move) -> Option<Piece> {
    let mut moved = position.set_piece(m.from(), None);
    if let (Some(piece), Some(promotion)) = (moved.as_mut(), m.promotion()) {
        if piece.kind == PieceKind::Pawn {
            piece.kind = promotion.kind();
        }
    }
    let captured = position.set_piece(m.to(), moved);
    position.side_to_move = position.side_to_move.opposite();
    captured
}

/// Returns a copy of `position` with `m` played on it.
pub fn make_move(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    play_move(&mut next, m);
    next
}

fn generate_into(position: &Position, from: Square, moves: &mut MoveList) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };

    match Shape::of(piece.kind) {
        Some(shape) => traverse(position, from, piece.color, shape, moves),
        None => {
            debug_assert_eq!(piece.kind, PieceKind::Pawn);
            pawn::generate(position, from, piece.color, moves);
        }
    }
}

/// Walks each vector of `shape` from `from`.
///
/// An empty square is added and, for sliders, the walk continues; an enemy
/// piece is added as a capture and ends the walk; an own piece or the board
/// edge ends the walk without adding anything.
fn traverse(position: &Position, from: Square, color: Color, shape: Shape, moves: &mut MoveList) {
    for &(d_row, d_col) in shape.vectors {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            if !shape.slides {
                break;
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn targets(fen: &str, from: &str) -> Vec<String> {
        let position = Position::from_fen(fen).unwrap();
        let mut ends: Vec<String> = pseudo_legal_moves(&position, sq(from))
            .into_iter()
            .map(|m| m.to().to_algebraic())
            .collect();
        ends.sort();
        ends
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq("e2"), sq("e4"));
        let m2 = Move::new(sq("d2"), sq("d4"));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains(&m2));

        list.retain(|m| m.from() == sq("d2"));
        assert_eq!(list.as_slice(), &[m2]);
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(pseudo_legal_moves(&Position::startpos(), sq("e4")).is_empty());
    }

    #[test]
    fn rook_on_empty_board() {
        assert_eq!(targets("8/8/8/8/3R4/8/8/8 w", "d4").len(), 14);
    }

    #[test]
    fn bishop_on_empty_board() {
        assert_eq!(targets("8/8/8/8/3B4/8/8/8 w", "d4").len(), 13);
    }

    #[test]
    fn queen_on_empty_board() {
        assert_eq!(targets("8/8/8/8/3Q4/8/8/8 w", "d4").len(), 27);
    }

    #[test]
    fn king_in_corner() {
        assert_eq!(targets("8/8/8/8/8/8/8/K7 w", "a1"), vec!["a2", "b1", "b2"]);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let position = Position::startpos();
        let mut ends: Vec<String> = pseudo_legal_moves(&position, Square::G1)
            .into_iter()
            .map(|m| m.to().to_algebraic())
            .collect();
        ends.sort();
        assert_eq!(ends, vec!["f3", "h3"]);
    }

    #[test]
    fn knight_in_corner() {
        assert_eq!(targets("8/8/8/8/8/8/8/N7 w", "a1"), vec!["b3", "c2"]);
    }

    #[test]
    fn slider_stops_at_capture_and_own_piece() {
        // Rook d4, enemy pawn d7, own pawn f4.
        let ends = targets("8/3p4/8/8/3R1P2/8/8/8 w", "d4");
        assert!(ends.contains(&"d7".to_string()));
        assert!(!ends.contains(&"d8".to_string()));
        assert!(ends.contains(&"e4".to_string()));
        assert!(!ends.contains(&"f4".to_string()));
        assert!(!ends.contains(&"g4".to_string()));
    }

    #[test]
    fn startpos_pseudo_legal_count() {
        let position = Position::startpos();
        assert_eq!(pseudo_legal_moves_for(&position, Color::White).len(), 20);
        assert_eq!(pseudo_legal_moves_for(&position, Color::Black).len(), 20);
    }

    #[test]
    fn play_move_relocates_and_flips_turn() {
        let mut position = Position::from_fen("8/3p4/8/8/3R4/8/8/8 w").unwrap();
        let captured = play_move(&mut position, Move::new(sq("d4"), sq("d7")));
        assert_eq!(captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(position.piece_at(sq("d4")), None);
        assert_eq!(
            position.piece_at(sq("d7")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(position.side_to_move, Color::Black);
    }

    #[test]
    fn make_move_promotes_pawns_only() {
        use chess_core::Promotion;

        let position = Position::from_fen("8/P7/8/8/8/8/8/R7 w").unwrap();
        let promoted = make_move(
            &position,
            Move::promoting(sq("a7"), Square::A8, Promotion::Knight),
        );
        assert_eq!(
            promoted.piece_at(Square::A8),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );

        let rook = make_move(
            &position,
            Move::promoting(Square::A1, sq("a2"), Promotion::Queen),
        );
        assert_eq!(
            rook.piece_at(sq("a2")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        // The source position is untouched.
        assert_eq!(position.piece_at(sq("a7")).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn generation_is_deterministic() {
        let position =
            Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w").unwrap();
        assert_eq!(
            pseudo_legal_moves_for(&position, Color::White),
            pseudo_legal_moves_for(&position, Color::White)
        );
    }
}
