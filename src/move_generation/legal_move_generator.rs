//! Full legal move generation pipeline.
//!
//! Walks the board in row-major order, collects each own piece's pseudo-legal
//! moves in generation order, and drops every move that would leave the
//! mover's king attacked. The resulting order is stable, which search relies
//! on for reproducible tie-breaking.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_checks::would_expose_check;
use crate::moves::chess_move::Move;
use crate::moves::piece_rules::{is_valid_move, pseudo_legal_moves};

/// Every pseudo-legal move of `color`, in generation order.
pub fn generate_pseudo_legal_moves(board: &BoardState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    let own: Vec<Square> = board.pieces_of(color).map(|(square, _)| square).collect();
    for square in own {
        out.extend(pseudo_legal_moves(board, square));
    }
    out
}

pub fn generate_legal_moves(board: &BoardState, color: Color) -> Vec<Move> {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| !would_expose_check(board, *mv))
        .collect()
}

/// Short-circuiting form of `!generate_legal_moves(..).is_empty()`.
pub fn has_legal_move(board: &BoardState, color: Color) -> bool {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .any(|mv| !would_expose_check(board, mv))
}

/// Legal for `color` to play on this board: own piece, valid geometry and
/// promotion, and the king left safe.
pub fn is_legal_move(board: &BoardState, color: Color, mv: Move) -> bool {
    matches!(board.piece_at(mv.from), Some(piece) if piece.color == color)
        && is_valid_move(board, mv)
        && !would_expose_check(board, mv)
}
