//! Perft node counting for move-generator verification.
//!
//! Counts leaf nodes (and a few move categories at the leaves) of the legal
//! move tree. Uses make/unmake on a single board instead of cloning per node.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft(board: &BoardState, side: Color, depth: u8) -> PerftCounts {
    let mut scratch = board.clone();
    perft_recurse(&mut scratch, side, depth)
}

fn perft_recurse(board: &mut BoardState, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(board, side) {
        let Some(undo) = make_move(board, mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(undo.is_capture());
            total.en_passant += usize::from(undo.is_en_passant());
            total.castles += usize::from(undo.is_castling());
            total.promotions += usize::from(mv.promotion.is_some());
            total.checks += usize::from(is_in_check(board, side.flip()));
        } else {
            total.merge(perft_recurse(board, side.flip(), depth - 1));
        }

        unmake_move(board, &undo);
    }

    total
}

/// Per-root-move node counts, useful when bisecting a generator mismatch.
pub fn perft_divide(board: &BoardState, side: Color, depth: u8) -> Vec<(String, usize)> {
    let mut scratch = board.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in generate_legal_moves(&scratch, side) {
        let Some(undo) = make_move(&mut scratch, mv) else {
            continue;
        };
        let nodes = perft_recurse(&mut scratch, side.flip(), depth - 1).nodes;
        unmake_move(&mut scratch, &undo);
        out.push((mv.to_long_algebraic(), nodes));
    }
    out
}
