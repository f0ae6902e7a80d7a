//! Chess position representation.

use chess_core::{Color, FenError, FenParser, Piece, PieceKind, Square};
use std::fmt;

/// Back rank file order, a to h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces plus the side to move.
///
/// Each square holds at most one piece by construction. Nothing enforces one
/// king per side: boards with no king or several kings are valid values and
/// the check queries degrade gracefully on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Square contents, indexed by [`Square::index`].
    squares: [Option<Piece>; 64],

    /// The side to move.
    pub side_to_move: Color,
}

impl Position {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        for (i, kind) in BACK_RANK.into_iter().enumerate() {
            let col = i as u8 + 1;
            for color in Color::ALL {
                position.place(color.back_row(), col, Piece::new(color, kind));
                position.place(
                    color.pawn_start_row(),
                    col,
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        position
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(sq) = Square::from_coords(row, col) {
            self.set_piece(sq, Some(piece));
        }
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Position {
            squares: parsed.squares,
            side_to_move: parsed.active_color,
        })
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        self.fen_record().to_fen()
    }

    /// Returns only the piece placement field of the FEN.
    pub fn placement(&self) -> String {
        self.fen_record().placement()
    }

    fn fen_record(&self) -> FenParser {
        FenParser {
            squares: self.squares,
            active_color: self.side_to_move,
        }
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Puts `piece` on `sq` (or clears it with `None`), returning the
    /// previous occupant.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index() as usize], piece)
    }

    /// Iterates over occupied squares in row-major order from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Returns the number of pieces on the board.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Locates `color`'s king, scanning from a1 row by row.
    ///
    /// Returns the first king found, or `None` if that side has no king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Renders the board as a text diagram, rank 8 at the top.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            write!(f, "{} ", row)?;
            for col in 1..=8u8 {
                let c = Square::from_coords(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
