//! King stepping and castling rules.
//!
//! Castling is expressed as a two-column king move from the untouched start
//! square. The rook follows in `legal_move_apply`. Attack queries never go
//! through this module's castling path, only through [`king_attacks`].

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{KING_START_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;
use crate::moves::piece_rules::destination_ok;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
fn is_adjacent(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

pub fn is_valid_king_move(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    if is_adjacent(from, to) {
        return destination_ok(board, piece, to);
    }
    is_valid_castle(board, from, piece, to)
}

/// Castling: king and the chosen rook unmoved, the squares between them empty,
/// and none of the king's start, transit and destination squares attacked.
pub fn is_valid_castle(board: &BoardState, from: Square, king: Piece, to: Square) -> bool {
    let home_row = king.color.home_row();
    if king.has_moved
        || from.row() != home_row
        || from.col() != KING_START_COL
        || to.row() != home_row
    {
        return false;
    }

    let (rook_col, step) = match to.col() {
        6 => (KINGSIDE_ROOK_COL, 1i8),
        2 => (QUEENSIDE_ROOK_COL, -1i8),
        _ => return false,
    };

    let Some(rook_square) = Square::new(home_row, rook_col) else {
        return false;
    };
    let rook_ready = matches!(
        board.piece_at(rook_square),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    );
    if !rook_ready {
        return false;
    }

    let low = from.col().min(rook_col) + 1;
    let high = from.col().max(rook_col);
    let between_empty = (low..high)
        .filter_map(|col| Square::new(home_row, col))
        .all(|square| board.is_empty_at(square));
    if !between_empty {
        return false;
    }

    let enemy = king.color.flip();
    [Some(from), from.offset(0, step), Some(to)]
        .into_iter()
        .all(|square| square.is_some_and(|square| !is_square_attacked(board, square, enemy)))
}

pub fn generate_king_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KING_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if destination_ok(board, piece, to) {
                out.push(Move::new(from, to));
            }
        }
    }

    for d_col in [2i8, -2i8] {
        if let Some(to) = from.offset(0, d_col) {
            if is_valid_castle(board, from, piece, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// Adjacent squares only; castling never counts as an attack.
pub fn king_attacks(_board: &BoardState, from: Square, _piece: Piece, target: Square) -> bool {
    is_adjacent(from, target)
}
