//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! The rules engine only tracks piece placement and the side to move. The
//! castling, en passant and clock fields are optional on input; when present
//! they are syntax-checked and then dropped. Output always writes `- - 0 1`
//! for them.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move counter: {0}")]
    InvalidMoveCounter(String),
}

/// A parsed FEN record: the 64 squares plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Square contents indexed by [`Square::index`].
    pub squares: [Option<Piece>; 64],
    /// Side to move.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let squares = Self::parse_piece_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        if let Some(castling) = parts.get(2) {
            Self::validate_castling(castling)?;
        }
        if let Some(ep) = parts.get(3) {
            Self::validate_en_passant(ep)?;
        }
        for counter in parts.iter().skip(4) {
            counter
                .parse::<u32>()
                .map_err(|_| FenError::InvalidMoveCounter(counter.to_string()))?;
        }

        Ok(FenParser {
            squares,
            active_color,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<[Option<Piece>; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut squares = [None; 64];
        for (i, rank) in ranks.iter().enumerate() {
            let row = (8 - i) as u8;
            let mut col = 1u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "invalid empty run '{}' in rank {}",
                            c, row
                        )));
                    }
                    col += skip as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let sq = Square::from_coords(row, col).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "rank {} has more than 8 squares",
                            row
                        ))
                    })?;
                    squares[sq.index() as usize] = Some(piece);
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c, row
                    )));
                }
                if col > 9 {
                    break;
                }
            }
            if col != 9 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    row,
                    col - 1
                )));
            }
        }

        Ok(squares)
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        Ok(())
    }

    fn validate_en_passant(ep: &str) -> Result<(), FenError> {
        if ep == "-" {
            return Ok(());
        }

        match Square::from_algebraic(ep) {
            Some(sq) if sq.row() == 3 || sq.row() == 6 => Ok(()),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    /// Writes only the piece placement field.
    pub fn placement(&self) -> String {
        let mut out = String::new();

        for row in (1..=8u8).rev() {
            let mut empty_count = 0;
            for col in 1..=8u8 {
                let piece = Square::from_coords(row, col)
                    .and_then(|sq| self.squares[sq.index() as usize]);
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row > 1 {
                out.push('/');
            }
        }

        out
    }

    /// Converts the record back to a full FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} - - 0 1",
            self.placement(),
            self.active_color.to_fen_char()
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
