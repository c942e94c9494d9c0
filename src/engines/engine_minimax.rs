//! Fixed-depth alpha-beta engine.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::search::minimax::SearchConfig;

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig::with_depth(depth))
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let result = game_state.best_move_with(game_state.side_to_move(), &self.config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score {}",
            result.depth, result.nodes, result.score
        ));
        if let Some(mv) = result.best_move {
            out.info_lines.push(format!("info pv {}", mv.to_long_algebraic()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn engine_finds_the_back_rank_mate() {
        let game = GameState::from_placement("6k1/5ppp/8/8/8/8/8/Q3K3", Color::White).expect("placement");
        let mut engine = MinimaxEngine::with_depth(1);
        let out = engine.choose_move(&game).expect("search should not fail");
        assert_eq!(out.best_move.map(|m| m.to_string()).as_deref(), Some("a1 a8"));
        assert!(out.score.is_some());
        assert!(out.info_lines.iter().any(|line| line.contains("pv a1a8")));
    }

    #[test]
    fn engine_searches_for_the_side_to_move() {
        let mut game = GameState::new();
        assert!(game.apply_move_text("e2 e4"));
        let mut engine = MinimaxEngine::with_depth(1);
        let out = engine.choose_move(&game).expect("search should not fail");
        let mv = out.best_move.expect("black has moves");
        assert!(game.legal_moves(Color::Black).contains(&mv));
    }

    #[test]
    fn default_depth_is_three() {
        assert_eq!(MinimaxEngine::default().config().max_depth, 3);
    }

    #[test]
    fn finished_game_yields_no_move() {
        let game = GameState::from_placement("7k/5Q2/6K1/8/8/8/8/8", Color::Black).expect("placement");
        let mut engine = MinimaxEngine::with_depth(2);
        let out = engine.choose_move(&game).expect("search should not fail");
        assert_eq!(out.best_move, None);
    }
}
