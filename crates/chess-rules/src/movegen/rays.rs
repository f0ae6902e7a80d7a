//! Direction tables for the vector-driven pieces.
//!
//! Every piece except the pawn is described by a set of (row, column) step
//! vectors and whether it repeats the step until blocked.

use chess_core::PieceKind;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// How a piece kind moves: its step vectors and whether it slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub vectors: &'static [(i8, i8)],
    pub slides: bool,
}

impl Shape {
    /// Returns the movement shape of `kind`, or `None` for pawns, whose moves
    /// depend on color and occupancy rather than a fixed vector set.
    pub const fn of(kind: PieceKind) -> Option<Shape> {
        let shape = match kind {
            PieceKind::Rook => Shape {
                vectors: &ROOK_DIRECTIONS,
                slides: true,
            },
            PieceKind::Bishop => Shape {
                vectors: &BISHOP_DIRECTIONS,
                slides: true,
            },
            PieceKind::Queen => Shape {
                vectors: &QUEEN_DIRECTIONS,
                slides: true,
            },
            PieceKind::King => Shape {
                vectors: &KING_STEPS,
                slides: false,
            },
            PieceKind::Knight => Shape {
                vectors: &KNIGHT_JUMPS,
                slides: false,
            },
            PieceKind::Pawn => return None,
        };
        Some(shape)
    }
}
