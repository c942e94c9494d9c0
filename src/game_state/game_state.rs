//! Game-level state wrapped around a `BoardState`.
//!
//! `GameState` owns everything the rules engine itself keeps out of the board:
//! whose turn it is, the history of accepted moves (with enough to undo them),
//! every piece placement seen so far for repetition detection, and the
//! half-move clock for the fifty-move rule. Moves reach the board only after
//! passing the full legality filter.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_COUNT};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{self, board_status, GameStatus};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::{generate_legal_moves, is_legal_move};
use crate::moves::chess_move::Move;
use crate::search::minimax::{search_best_move_with_history, SearchConfig, SearchHistory, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    undo: UndoState,
    prev_halfmove_clock: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: BoardState,
    side_to_move: Color,
    initial_board: BoardState,
    initial_side: Color,
    history: Vec<HistoryEntry>,
    // Placement after each ply, starting with the initial one.
    positions: Vec<String>,
    halfmove_clock: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(BoardState::standard(), Color::White)
    }

    pub fn from_board(board: BoardState, side_to_move: Color) -> Self {
        let positions = vec![board.to_piece_placement_string()];
        Self {
            initial_board: board.clone(),
            board,
            side_to_move,
            initial_side: side_to_move,
            history: Vec::new(),
            positions,
            halfmove_clock: 0,
        }
    }

    pub fn from_placement(placement: &str, side_to_move: Color) -> ChessResult<Self> {
        Ok(Self::from_board(
            BoardState::from_piece_placement(placement)?,
            side_to_move,
        ))
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn initial_board(&self) -> &BoardState {
        &self.initial_board
    }

    #[inline]
    pub fn initial_side(&self) -> Color {
        self.initial_side
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Accepted moves in the order they were played.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.undo.mv)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Validate and play `mv` for the side to move.
    pub fn try_apply_move(&mut self, mv: Move) -> ChessResult<Move> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::EmptySource(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::WrongSide {
                square: mv.from,
                owner: piece.color,
                to_move: self.side_to_move,
            });
        }
        if !is_legal_move(&self.board, self.side_to_move, mv) {
            return Err(ChessError::IllegalMove(mv));
        }

        let undo = make_move(&mut self.board, mv).ok_or(ChessError::EmptySource(mv.from))?;
        let prev_halfmove_clock = self.halfmove_clock;
        self.halfmove_clock = if undo.resets_halfmove_clock() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.history.push(HistoryEntry {
            undo,
            prev_halfmove_clock,
        });
        self.positions.push(self.board.to_piece_placement_string());
        self.side_to_move = self.side_to_move.flip();

        debug!(%mv, side = %piece.color, halfmove_clock = self.halfmove_clock, "move applied");
        Ok(mv)
    }

    pub fn try_apply_move_text(&mut self, text: &str) -> ChessResult<Move> {
        let mv: Move = text.parse()?;
        self.try_apply_move(mv)
    }

    /// Play `from`-`to` (with an optional `Q|R|B|N` promotion letter).
    /// Returns `false` and leaves the game unchanged on any rejection.
    pub fn apply_move(&mut self, from: &str, to: &str, promotion: Option<&str>) -> bool {
        let result = Move::from_parts(from, to, promotion).and_then(|mv| self.try_apply_move(mv));
        log_rejection(&result);
        result.is_ok()
    }

    /// `apply_move` for wire-format text such as `"e2 e4"` or `"e7 e8 Q"`.
    pub fn apply_move_text(&mut self, text: &str) -> bool {
        let result = self.try_apply_move_text(text);
        log_rejection(&result);
        result.is_ok()
    }

    /// Take back the last accepted move.
    pub fn undo_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        unmake_move(&mut self.board, &entry.undo);
        self.positions.pop();
        self.halfmove_clock = entry.prev_halfmove_clock;
        self.side_to_move = self.side_to_move.flip();
        debug!(mv = %entry.undo.mv, "move undone");
        Some(entry.undo.mv)
    }

    pub fn is_in_check(&self, side: Color) -> bool {
        legal_move_checks::is_in_check(&self.board, side)
    }

    pub fn is_checkmate(&self, side: Color) -> bool {
        game_status::is_checkmate(&self.board, side)
    }

    pub fn is_stalemate(&self, side: Color) -> bool {
        game_status::is_stalemate(&self.board, side)
    }

    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        generate_legal_moves(&self.board, side)
    }

    /// The current placement has occurred at least three times.
    pub fn is_draw_by_repetition(&self) -> bool {
        let Some(current) = self.positions.last() else {
            return false;
        };
        self.positions.iter().filter(|seen| *seen == current).count() >= REPETITION_COUNT
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }

    /// Status of the side to move. Mate and stalemate take precedence over
    /// the history-based draws.
    pub fn status(&self) -> GameStatus {
        match board_status(&self.board, self.side_to_move) {
            decided @ (GameStatus::Checkmate { .. } | GameStatus::Stalemate) => decided,
            _ if self.is_draw_by_repetition() => GameStatus::DrawByRepetition,
            _ if self.is_fifty_move_draw() => GameStatus::DrawByFiftyMoveRule,
            live => live,
        }
    }

    pub fn best_move(&self, side: Color, depth: u8) -> SearchResult {
        self.best_move_with(side, &SearchConfig::with_depth(depth))
    }

    pub fn best_move_with(&self, side: Color, config: &SearchConfig) -> SearchResult {
        let history = SearchHistory {
            placements: self.positions.clone(),
            halfmove_clock: self.halfmove_clock,
        };
        search_best_move_with_history(&self.board, side, config, &history)
    }

    pub fn piece_placement_fen(&self) -> String {
        self.board.to_piece_placement_string()
    }
}

fn log_rejection(result: &ChessResult<Move>) {
    if let Err(err) = result {
        debug!(%err, "move rejected");
    }
}
