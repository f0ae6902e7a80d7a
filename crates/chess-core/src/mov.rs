//! Move representation.

use crate::{Promotion, Square};
use std::fmt;

/// A chess move: start square, end square, and an optional promotion.
///
/// Equality compares all three fields, so a promotion to a queen and a
/// promotion to a knight on the same squares are different moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Promotion>,
}

impl Move {
    /// Creates a move without promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a pawn move that promotes on arrival.
    #[inline]
    pub const fn promoting(from: Square, to: Square, promotion: Promotion) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the promotion choice, if any.
    #[inline]
    pub const fn promotion(self) -> Option<Promotion> {
        self.promotion
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        let promo = match self.promotion {
            Some(Promotion::Knight) => "n",
            Some(Promotion::Bishop) => "b",
            Some(Promotion::Rook) => "r",
            Some(Promotion::Queen) => "q",
            None => "",
        };
        format!("{}{}{}", self.from, self.to, promo)
    }

    /// Parses a move from UCI notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        if s.len() == 5 {
            let promotion = match s.chars().nth(4)? {
                'n' | 'N' => Promotion::Knight,
                'b' | 'B' => Promotion::Bishop,
                'r' | 'R' => Promotion::Rook,
                'q' | 'Q' => Promotion::Queen,
                _ => return None,
            };
            Some(Move::promoting(from, to, promotion))
        } else {
            Some(Move::new(from, to))
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
