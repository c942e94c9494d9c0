use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The mover as it stood on `mv.from`, before promotion and `has_moved`.
    pub moved_piece: Piece,
    /// Captured piece and the square it was taken on (differs from `mv.to` en passant).
    pub captured: Option<(Square, Piece)>,
    /// Rook relocated by castling: origin, destination and its prior state.
    pub castling_rook: Option<(Square, Square, Piece)>,
    pub prev_en_passant_target: Option<Square>,
}

impl UndoState {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some((square, _)) if square != self.mv.to)
    }

    /// Pawn moves and captures reset the fifty-move count.
    #[inline]
    pub fn resets_halfmove_clock(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn || self.is_capture()
    }
}
