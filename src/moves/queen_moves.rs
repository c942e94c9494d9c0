use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Piece, Square};
use crate::moves::bishop_moves::{bishop_attacks, generate_bishop_moves, is_valid_bishop_move};
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::{generate_rook_moves, is_valid_rook_move, rook_attacks};

pub fn is_valid_queen_move(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    is_valid_rook_move(board, from, piece, to) || is_valid_bishop_move(board, from, piece, to)
}

pub fn generate_queen_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_rook_moves(board, from, piece, out);
    generate_bishop_moves(board, from, piece, out);
}

pub fn queen_attacks(board: &BoardState, from: Square, piece: Piece, target: Square) -> bool {
    rook_attacks(board, from, piece, target) || bishop_attacks(board, from, piece, target)
}
