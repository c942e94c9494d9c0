//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `(row, col)` squares. Both directions are total: bad input maps to `None`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

impl Square {
    /// Parse a coordinate such as `"e4"`. Wrong length, file or rank gives `None`.
    #[inline]
    pub fn from_algebraic(text: &str) -> Option<Self> {
        algebraic_to_square(text).ok()
    }

    /// File letter followed by rank digit, e.g. `"e4"`.
    #[inline]
    pub fn to_algebraic(self) -> String {
        let file_char = char::from(b'a' + self.col());
        let rank_char = char::from(b'8' - self.row());
        format!("{file_char}{rank_char}")
    }
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| ChessError::InvalidAlgebraic(text.to_owned()))
}
