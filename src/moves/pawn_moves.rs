use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Whether `to` is the board's en-passant target and a capturable enemy pawn
/// stands beside the mover.
fn is_en_passant_capture(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    if board.en_passant_target() != Some(to) || !board.is_empty_at(to) {
        return false;
    }
    let Some(victim_square) = Square::new(from.row(), to.col()) else {
        return false;
    };
    matches!(
        board.piece_at(victim_square),
        Some(victim) if victim.kind == PieceKind::Pawn && victim.color != piece.color
    )
}

pub fn is_valid_pawn_move(board: &BoardState, from: Square, piece: Piece, to: Square) -> bool {
    let forward = piece.color.forward();
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    match (d_row, d_col.abs()) {
        (r, 0) if r == forward => board.is_empty_at(to),
        (r, 0) if r == 2 * forward => {
            from.row() == piece.color.pawn_start_row()
                && from
                    .offset(forward, 0)
                    .is_some_and(|middle| board.is_empty_at(middle))
                && board.is_empty_at(to)
        }
        (r, 1) if r == forward => match board.piece_at(to) {
            Some(occupant) => occupant.color != piece.color,
            None => is_en_passant_capture(board, from, piece, to),
        },
        _ => false,
    }
}

fn push_pawn_move(piece: Piece, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row() == piece.color.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

pub fn generate_pawn_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let forward = piece.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            push_pawn_move(piece, from, one_step, out);

            if from.row() == piece.color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        let capturable = match board.piece_at(to) {
            Some(occupant) => occupant.color != piece.color,
            None => is_en_passant_capture(board, from, piece, to),
        };
        if capturable {
            push_pawn_move(piece, from, to, out);
        }
    }
}

/// Pawns attack the two forward diagonals regardless of what stands there.
pub fn pawn_attacks(_board: &BoardState, from: Square, piece: Piece, target: Square) -> bool {
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    d_row == piece.color.forward() && d_col.abs() == 1
}
