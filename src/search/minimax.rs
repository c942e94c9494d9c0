//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Scores are always from the root side's perspective: the root side
//! maximizes, its opponent minimizes. Every explored node works on its own
//! board clone. Moves are tried in generation order and a later move must be
//! strictly better to replace the current best, so ties resolve to the move
//! generated first.

use tracing::{debug, trace};

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_COUNT};
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{evaluate_with, EvalWeights};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side has no legal move (or the depth is zero).
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Game context the search continues from: placements already seen and
/// the current fifty-move count.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    pub placements: Vec<String>,
    pub halfmove_clock: u16,
}

struct Searcher {
    root: Color,
    max_depth: u8,
    weights: EvalWeights,
    placements: Vec<String>,
    nodes: u64,
}

impl Searcher {
    fn evaluate(&self, board: &BoardState) -> i32 {
        evaluate_with(board, self.root, &self.weights)
    }

    /// Static score of a leaf `depth` plies above the horizon. Mate scores
    /// shrink by the distance from the root so shorter mates rank higher.
    fn leaf_score(&self, board: &BoardState, depth: u8) -> i32 {
        let score = self.evaluate(board);
        let ply = i32::from(self.max_depth.saturating_sub(depth));
        let mate_threshold = self.weights.mate_score / 2;
        if score > mate_threshold {
            score - ply
        } else if score < -mate_threshold {
            score + ply
        } else {
            score
        }
    }

    fn is_repetition(&self) -> bool {
        let Some(current) = self.placements.last() else {
            return false;
        };
        self.placements.iter().filter(|seen| *seen == current).count() >= REPETITION_COUNT
    }

    /// Legal children of `board` for `to_move`, in generation order.
    fn children(board: &BoardState, to_move: Color) -> impl Iterator<Item = (Move, BoardState, bool)> + '_ {
        generate_pseudo_legal_moves(board, to_move)
            .into_iter()
            .filter_map(move |mv| {
                let mut child = board.clone();
                let undo = make_move(&mut child, mv)?;
                if is_in_check(&child, to_move) {
                    return None;
                }
                Some((mv, child, undo.resets_halfmove_clock()))
            })
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &BoardState,
        to_move: Color,
        depth: u8,
        halfmove_clock: u16,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || self.is_repetition() || halfmove_clock >= FIFTY_MOVE_HALFMOVES {
            return self.leaf_score(board, depth);
        }

        let mut best: Option<i32> = None;
        for (mv, child, resets_clock) in Self::children(board, to_move) {
            let clock = if resets_clock {
                0
            } else {
                halfmove_clock.saturating_add(1)
            };
            self.placements.push(child.to_piece_placement_string());
            let score = self.minimax(&child, to_move.flip(), depth - 1, clock, alpha, beta, !maximizing);
            self.placements.pop();
            trace!(depth, %mv, score, "minimax child");

            if maximizing {
                let value = best.map_or(score, |b| b.max(score));
                best = Some(value);
                alpha = alpha.max(value);
            } else {
                let value = best.map_or(score, |b| b.min(score));
                best = Some(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        best.unwrap_or_else(|| self.leaf_score(board, depth))
    }
}

/// Best move for `side` searched to `config.max_depth` plies from a fresh position.
pub fn search_best_move(board: &BoardState, side: Color, config: &SearchConfig) -> SearchResult {
    search_best_move_with_history(board, side, config, &SearchHistory::default())
}

pub fn search_best_move_with_history(
    board: &BoardState,
    side: Color,
    config: &SearchConfig,
    history: &SearchHistory,
) -> SearchResult {
    let mut searcher = Searcher {
        root: side,
        max_depth: config.max_depth,
        weights: config.weights,
        placements: history.placements.clone(),
        nodes: 1,
    };

    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            score: searcher.evaluate(board),
            depth: 0,
            nodes: 1,
        };
    }

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(Move, i32)> = None;

    for (mv, child, resets_clock) in Searcher::children(board, side) {
        let clock = if resets_clock {
            0
        } else {
            history.halfmove_clock.saturating_add(1)
        };
        searcher.placements.push(child.to_piece_placement_string());
        let score = searcher.minimax(&child, side.flip(), config.max_depth - 1, clock, alpha, beta, false);
        searcher.placements.pop();
        trace!(%mv, score, "root move");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
            alpha = alpha.max(score);
        }
    }

    let result = match best {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
            depth: config.max_depth,
            nodes: searcher.nodes,
        },
        None => SearchResult {
            best_move: None,
            score: searcher.evaluate(board),
            depth: config.max_depth,
            nodes: searcher.nodes,
        },
    };

    debug!(
        side = %side,
        depth = config.max_depth,
        best_move = ?result.best_move.map(|mv| mv.to_string()),
        score = result.score,
        nodes = result.nodes,
        "search finished"
    );
    result
}
