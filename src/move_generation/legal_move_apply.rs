//! Board mutation for already-validated moves.
//!
//! `make_move` performs the side effects of a move (capture bookkeeping,
//! en passant removal, castling rook relocation, promotion, `has_moved`,
//! en-passant target) and returns the record `unmake_move` needs to restore
//! the prior board exactly. Neither function checks legality.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;

/// Apply `mv` in place. Returns `None` (board untouched) when `mv.from` is empty.
pub fn make_move(board: &mut BoardState, mv: Move) -> Option<UndoState> {
    let moved_piece = board.piece_at(mv.from)?;
    let prev_en_passant_target = board.en_passant_target();
    let d_row = mv.to.row() as i8 - mv.from.row() as i8;
    let d_col = mv.to.col() as i8 - mv.from.col() as i8;

    // Captures, including the pawn beside the mover on an en-passant capture.
    let mut captured = board.piece_at(mv.to).map(|piece| (mv.to, piece));
    if moved_piece.kind == PieceKind::Pawn
        && d_col != 0
        && captured.is_none()
        && prev_en_passant_target == Some(mv.to)
    {
        captured = Square::new(mv.from.row(), mv.to.col())
            .and_then(|square| board.piece_at(square).map(|piece| (square, piece)));
    }
    if let Some((square, piece)) = captured {
        board.set_piece_at(square, None);
        board.record_capture(piece);
    }

    // Castling rook follows the king.
    let mut castling_rook = None;
    if moved_piece.kind == PieceKind::King && d_row == 0 && d_col.abs() == 2 {
        let (rook_col, rook_to_col) = if d_col > 0 {
            (KINGSIDE_ROOK_COL, mv.from.col() + 1)
        } else {
            (QUEENSIDE_ROOK_COL, mv.from.col() - 1)
        };
        let rook_from = Square::new(mv.from.row(), rook_col);
        let rook_to = Square::new(mv.from.row(), rook_to_col);
        if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
            if let Some(rook) = board.take_piece_at(rook_from) {
                board.set_piece_at(
                    rook_to,
                    Some(Piece {
                        has_moved: true,
                        ..rook
                    }),
                );
                castling_rook = Some((rook_from, rook_to, rook));
            }
        }
    }

    let placed = Piece {
        kind: mv.promotion.unwrap_or(moved_piece.kind),
        color: moved_piece.color,
        has_moved: true,
    };
    board.set_piece_at(mv.from, None);
    board.set_piece_at(mv.to, Some(placed));

    let en_passant_target = if moved_piece.kind == PieceKind::Pawn && d_row.abs() == 2 {
        mv.from.offset(d_row / 2, 0)
    } else {
        None
    };
    board.set_en_passant_target(en_passant_target);

    Some(UndoState {
        mv,
        moved_piece,
        captured,
        castling_rook,
        prev_en_passant_target,
    })
}

/// Reverse a move previously applied with [`make_move`] on this board.
pub fn unmake_move(board: &mut BoardState, undo: &UndoState) {
    board.set_piece_at(undo.mv.to, None);
    board.set_piece_at(undo.mv.from, Some(undo.moved_piece));

    if let Some((rook_from, rook_to, rook)) = undo.castling_rook {
        board.set_piece_at(rook_to, None);
        board.set_piece_at(rook_from, Some(rook));
    }

    if let Some((square, piece)) = undo.captured {
        board.set_piece_at(square, Some(piece));
        board.forget_last_capture(piece.color);
    }

    board.set_en_passant_target(undo.prev_en_passant_target);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn mv(text: &str) -> Move {
        text.parse().expect("test move should parse")
    }

    #[test]
    fn double_push_sets_and_next_move_clears_en_passant_target() {
        let mut board = BoardState::standard();
        make_move(&mut board, mv("e2 e4")).expect("pawn on e2");
        assert_eq!(board.en_passant_target(), Some(sq("e3")));

        make_move(&mut board, mv("g8 f6")).expect("knight on g8");
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = BoardState::from_piece_placement("4k3/3p4/8/4P3/8/8/8/4K3").expect("placement");
        make_move(&mut board, mv("d7 d5")).expect("pawn on d7");
        assert_eq!(board.en_passant_target(), Some(sq("d6")));

        let undo = make_move(&mut board, mv("e5 d6")).expect("pawn on e5");
        assert!(undo.is_en_passant());
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_at(sq("d6")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.captured_pieces(Color::Black).len(), 1);
    }

    #[test]
    fn castling_moves_the_rook_and_marks_both_moved() {
        let mut board = BoardState::from_piece_placement("4k3/8/8/8/8/8/8/R3K2R").expect("placement");
        let undo = make_move(&mut board, mv("e1 c1")).expect("king on e1");
        assert!(undo.is_castling());
        assert_eq!(board.to_piece_placement_string(), "4k3/8/8/8/8/8/8/2KR3R");
        assert!(board.piece_at(sq("d1")).is_some_and(|rook| rook.has_moved));
        assert!(board.piece_at(sq("h1")).is_some_and(|rook| !rook.has_moved));
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut board = BoardState::from_piece_placement("1r2k3/P7/8/8/8/8/8/4K3").expect("placement");
        make_move(&mut board, mv("a7 b8 N")).expect("pawn on a7");
        assert_eq!(board.piece_at(sq("b8")).map(|p| p.kind), Some(PieceKind::Knight));
        assert_eq!(board.captured_pieces(Color::Black)[0].kind, PieceKind::Rook);
    }

    #[test]
    fn make_on_empty_square_is_rejected() {
        let mut board = BoardState::standard();
        assert!(make_move(&mut board, mv("e4 e5")).is_none());
        assert_eq!(board, BoardState::standard());
    }

    #[test]
    fn unmake_restores_board_exactly() {
        let start = BoardState::from_piece_placement("r3k2r/1P6/8/3pP3/8/8/8/R3K2R").expect("placement");
        let mut with_target = start.clone();
        with_target.set_en_passant_target(Some(sq("d6")));

        for text in ["e1 g1", "e1 c1", "e5 d6", "b7 a8 Q", "b7 b8 R", "a1 a8", "e5 e6"] {
            let mut board = with_target.clone();
            let undo = make_move(&mut board, mv(text)).expect("mover present");
            assert_ne!(board, with_target, "{text} should change the board");
            unmake_move(&mut board, &undo);
            assert_eq!(board, with_target, "{text} should unmake cleanly");
        }
    }
}
