//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type for the fallible inner operations
//! (parsing, move application, PGN replay). The caller-facing surface of
//! `GameState` folds these into `bool`/`Option` sentinels; use the `try_*`
//! variants when the reason for a rejection matters.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate outside `a1..h8` or of the wrong length.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// Move text that is not `"<from> <to>"` or `"<from> <to> <Q|R|B|N>"`.
    #[error("malformed move text: {0:?}")]
    MalformedMove(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(String),

    #[error("no piece on source square {0}")]
    EmptySource(Square),

    #[error("piece on {square} belongs to {owner}, but {to_move} is to move")]
    WrongSide {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// Piece-placement (FEN board field) text that does not describe 8x8 squares.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid PGN: {0}")]
    Pgn(String),

    #[error("no legal moves for {0}")]
    NoLegalMoves(Color),
}

pub type ChessResult<T> = Result<T, ChessError>;
