//! Per-kind move rules dispatched through a static table.
//!
//! Each piece kind contributes three pure functions: a destination validity
//! check, a pseudo-legal generator and an attack predicate. The attack
//! predicate only answers "does this piece hit that square", so kings attack
//! adjacent squares only and pawns attack diagonally whatever stands there.
//! That keeps attack queries free of castling and therefore non-recursive.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves;
use crate::moves::knight_moves;
use crate::moves::pawn_moves;
use crate::moves::queen_moves;
use crate::moves::rook_moves;

pub type ValidityFn = fn(&BoardState, Square, Piece, Square) -> bool;
pub type GeneratorFn = fn(&BoardState, Square, Piece, &mut Vec<Move>);
pub type AttackFn = fn(&BoardState, Square, Piece, Square) -> bool;

pub struct PieceRules {
    pub is_valid: ValidityFn,
    pub pseudo_legal: GeneratorFn,
    pub attacks: AttackFn,
}

static RULES: [PieceRules; 6] = [
    PieceRules {
        is_valid: pawn_moves::is_valid_pawn_move,
        pseudo_legal: pawn_moves::generate_pawn_moves,
        attacks: pawn_moves::pawn_attacks,
    },
    PieceRules {
        is_valid: knight_moves::is_valid_knight_move,
        pseudo_legal: knight_moves::generate_knight_moves,
        attacks: knight_moves::knight_attacks,
    },
    PieceRules {
        is_valid: bishop_moves::is_valid_bishop_move,
        pseudo_legal: bishop_moves::generate_bishop_moves,
        attacks: bishop_moves::bishop_attacks,
    },
    PieceRules {
        is_valid: rook_moves::is_valid_rook_move,
        pseudo_legal: rook_moves::generate_rook_moves,
        attacks: rook_moves::rook_attacks,
    },
    PieceRules {
        is_valid: queen_moves::is_valid_queen_move,
        pseudo_legal: queen_moves::generate_queen_moves,
        attacks: queen_moves::queen_attacks,
    },
    PieceRules {
        is_valid: king_moves::is_valid_king_move,
        pseudo_legal: king_moves::generate_king_moves,
        attacks: king_moves::king_attacks,
    },
];

#[inline]
pub fn rules_for(kind: PieceKind) -> &'static PieceRules {
    &RULES[kind.index()]
}

/// Pseudo-legal validity of `mv`, including the promotion rule: a pawn
/// reaching the far rank must name a promotion kind, and nothing else may.
pub fn is_valid_move(board: &BoardState, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    if mv.from == mv.to {
        return false;
    }

    let needs_promotion =
        piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row();
    let promotion_ok = match mv.promotion {
        Some(kind) => needs_promotion && kind.is_promotion_target(),
        None => !needs_promotion,
    };

    promotion_ok && (rules_for(piece.kind).is_valid)(board, mv.from, piece, mv.to)
}

/// Pseudo-legal moves of the piece on `from`, in generation order.
pub fn pseudo_legal_moves(board: &BoardState, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(piece) = board.piece_at(from) {
        (rules_for(piece.kind).pseudo_legal)(board, from, piece, &mut out);
    }
    out
}

/// Whether the piece on `from` attacks `target`.
pub fn attacks_square(board: &BoardState, from: Square, target: Square) -> bool {
    match board.piece_at(from) {
        Some(piece) if from != target => (rules_for(piece.kind).attacks)(board, from, piece, target),
        _ => false,
    }
}

/// A destination is usable when it is empty or holds an enemy piece.
#[inline]
pub fn destination_ok(board: &BoardState, piece: Piece, to: Square) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(occupant) => occupant.color != piece.color,
    }
}

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Unit step from `from` toward `to` when both lie on one rank, file or diagonal.
#[inline]
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    if (d_row, d_col) == (0, 0) {
        return None;
    }
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        Some((d_row.signum(), d_col.signum()))
    } else {
        None
    }
}

/// True when every square strictly between `from` and `to` along `step` is empty.
pub fn path_clear(board: &BoardState, from: Square, to: Square, step: (i8, i8)) -> bool {
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty_at(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    false
}

/// Slider reachability over the given direction set, ignoring the occupant of `to`.
pub fn slider_reaches(
    board: &BoardState,
    from: Square,
    to: Square,
    directions: &[(i8, i8)],
) -> bool {
    match line_step(from, to) {
        Some(step) if directions.contains(&step) => path_clear(board, from, to, step),
        _ => false,
    }
}

/// Walk each direction until the first occupied square, which is included
/// when it holds an enemy piece.
pub fn generate_slider_moves(
    board: &BoardState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to.offset(d_row, d_col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn board(placement: &str) -> BoardState {
        BoardState::from_piece_placement(placement).expect("test placement should parse")
    }

    #[test]
    fn line_step_detects_lines_only() {
        assert_eq!(line_step(sq("a1"), sq("a8")), Some((-1, 0)));
        assert_eq!(line_step(sq("a1"), sq("h8")), Some((-1, 1)));
        assert_eq!(line_step(sq("a1"), sq("b3")), None);
        assert_eq!(line_step(sq("a1"), sq("a1")), None);
    }

    #[test]
    fn empty_source_is_never_valid() {
        let b = BoardState::standard();
        assert!(!is_valid_move(&b, Move::new(sq("e4"), sq("e5"))));
        assert!(pseudo_legal_moves(&b, sq("e4")).is_empty());
    }

    #[test]
    fn own_piece_capture_is_never_valid() {
        let b = BoardState::standard();
        assert!(!is_valid_move(&b, Move::new(sq("a1"), sq("a2"))));
        assert!(!is_valid_move(&b, Move::new(sq("d1"), sq("e1"))));
    }

    #[test]
    fn promotion_is_required_exactly_on_the_last_rank() {
        let b = board("7k/4P3/8/8/8/8/8/4K3");
        assert!(!is_valid_move(&b, Move::new(sq("e7"), sq("e8"))));
        assert!(is_valid_move(
            &b,
            Move::with_promotion(sq("e7"), sq("e8"), PieceKind::Knight)
        ));
        assert!(!is_valid_move(
            &b,
            Move::with_promotion(sq("e7"), sq("e8"), PieceKind::King)
        ));

        let early = board("7k/8/8/8/8/8/4P3/4K3");
        assert!(!is_valid_move(
            &early,
            Move::with_promotion(sq("e2"), sq("e3"), PieceKind::Queen)
        ));
    }

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves() {
        let b = BoardState::standard();
        let count: usize = b
            .pieces_of(Color::White)
            .map(|(square, _)| pseudo_legal_moves(&b, square).len())
            .sum();
        assert_eq!(count, 20);
    }
}
