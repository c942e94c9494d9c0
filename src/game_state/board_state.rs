//! Mailbox board representation.
//!
//! `BoardState` is an 8x8 grid of optional pieces plus the en-passant target
//! and the per-side captured-piece lists. The grid is the only record of where
//! a piece stands. `Clone` is a full deep copy (pieces are `Copy`), which is
//! what legality simulation and search rely on.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_PIECE_PLACEMENT;
use crate::game_state::chess_types::*;
use crate::utils::fen::{generate_piece_placement, parse_piece_placement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: [[Option<Piece>; 8]; 8],
    en_passant_target: Option<Square>,
    // Indexed by the colour of the captured piece.
    captured: [Vec<Piece>; 2],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            en_passant_target: None,
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Standard initial position.
    pub fn standard() -> Self {
        parse_piece_placement(STARTING_PIECE_PLACEMENT).unwrap_or_default()
    }

    /// Build a board from the FEN piece-placement field. Every piece starts unmoved.
    pub fn from_piece_placement(placement: &str) -> ChessResult<Self> {
        parse_piece_placement(placement)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Pieces of `color` that have been captured so far, oldest first.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, piece: Piece) {
        self.captured[piece.color.index()].push(piece);
    }

    #[inline]
    pub(crate) fn forget_last_capture(&mut self, color: Color) -> Option<Piece> {
        self.captured[color.index()].pop()
    }

    /// Occupied squares with their pieces, in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// FEN piece-placement field, ranks 8 to 1.
    pub fn to_piece_placement_string(&self) -> String {
        generate_piece_placement(self)
    }
}
