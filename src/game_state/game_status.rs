//! Checkmate and stalemate detection.
//!
//! Both are decided purely from check status and the existence of a legal
//! move; there is no special-casing of named mating patterns.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Outcome summary for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoveRule,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }
}

pub fn is_checkmate(board: &BoardState, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

pub fn is_stalemate(board: &BoardState, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

/// Check/mate/stalemate status of `color`, ignoring the history-based draw rules.
pub fn board_status(board: &BoardState, color: Color) -> GameStatus {
    let in_check = is_in_check(board, color);
    let can_move = has_legal_move(board, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.flip(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
