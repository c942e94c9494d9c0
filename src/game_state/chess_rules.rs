//! Canonical chess-rule constants.
//!
//! Static rule-related literals used to initialize boards and to bound the
//! draw rules of the game-state layer.

/// Piece-placement field of the standard starting position.
pub const STARTING_PIECE_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Occurrences of one piece placement that make a threefold repetition.
pub const REPETITION_COUNT: usize = 3;

/// Column the king starts on.
pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
