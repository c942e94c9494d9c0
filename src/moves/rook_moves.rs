use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::chess_move::Move;
use crate::moves::piece_rules::{
    destination_ok, generate_slider_moves, slider_reaches, ORTHOGONAL_DIRECTIONS,
};

pub fn is_valid_rook_move(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    slider_reaches(board, from, to, &ORTHOGONAL_DIRECTIONS) && destination_ok(board, piece, to)
}

pub fn generate_rook_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_slider_moves(board, from, piece, &ORTHOGONAL_DIRECTIONS, out);
}

pub fn rook_attacks(board: &BoardState, from: Square, _piece: Piece, target: Square) -> bool {
    slider_reaches(board, from, target, &ORTHOGONAL_DIRECTIONS)
}
