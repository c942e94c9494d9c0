//! Move value type and its text encodings.
//!
//! The canonical exchange format is whitespace-separated tokens:
//! `"e2 e4"` or `"e7 e8 Q"`. PGN move text uses the compact long-algebraic
//! form instead (`"e2e4"`, `"e7e8q"`).

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Compact form used in PGN move text, e.g. `"e2e4"` or `"e7e8q"`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            out.push(kind.letter().to_ascii_lowercase());
        }
        out
    }

    pub fn from_long_algebraic(text: &str) -> ChessResult<Self> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(ChessError::MalformedMove(text.to_owned()));
        }

        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;
        let promotion = match text.get(4..) {
            Some(letter) if !letter.is_empty() => Some(parse_promotion(letter)?),
            _ => None,
        };

        Ok(Self { from, to, promotion })
    }

    /// Build a move from separate square and promotion-letter tokens.
    pub fn from_parts(from: &str, to: &str, promotion: Option<&str>) -> ChessResult<Self> {
        Ok(Self {
            from: algebraic_to_square(from)?,
            to: algebraic_to_square(to)?,
            promotion: promotion.map(parse_promotion).transpose()?,
        })
    }
}

fn parse_promotion(token: &str) -> ChessResult<PieceKind> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => PieceKind::from_letter(letter)
            .filter(|kind| kind.is_promotion_target())
            .ok_or_else(|| ChessError::InvalidPromotion(token.to_owned())),
        _ => Err(ChessError::InvalidPromotion(token.to_owned())),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " {}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [from, to] => Ok(Self::new(algebraic_to_square(from)?, algebraic_to_square(to)?)),
            [from, to, promo] => Ok(Self::with_promotion(
                algebraic_to_square(from)?,
                algebraic_to_square(to)?,
                parse_promotion(promo)?,
            )),
            _ => Err(ChessError::MalformedMove(text.to_owned())),
        }
    }
}
