//! Engine abstraction shared by every move chooser.
//!
//! An engine looks at a `GameState`, picks a move for the side to move and
//! reports any diagnostic lines alongside it. Engines never mutate the game;
//! the caller decides whether to play the returned move.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Score from the mover's perspective, when the engine computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
