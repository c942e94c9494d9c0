use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::chess_move::Move;
use crate::moves::piece_rules::destination_ok;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
fn is_knight_jump(from: Square, to: Square) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    KNIGHT_OFFSETS.contains(&(d_row, d_col))
}

pub fn is_valid_knight_move(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    is_knight_jump(from, to) && destination_ok(board, piece, to)
}

pub fn generate_knight_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if destination_ok(board, piece, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

pub fn knight_attacks(_board: &BoardState, from: Square, _piece: Piece, target: Square) -> bool {
    is_knight_jump(from, target)
}
