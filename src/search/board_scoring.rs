//! Static position evaluation.
//!
//! Scores are signed from the perspective of one side: material, a small
//! defended/undefended adjustment per piece, king safety, and fixed terms for
//! giving or being in check and for checkmate.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{find_king, is_in_check};
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::moves::piece_rules::attacks_square;

pub const MATE_SCORE: i32 = 1_000_000;

/// Every evaluator constant in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub piece_values: [i32; 6],
    pub defended_bonus: i32,
    pub undefended_penalty: i32,
    pub central_king_penalty: i32,
    pub castled_bonus: i32,
    pub pawn_shield_bonus: i32,
    pub check_bonus: i32,
    pub mate_score: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_values: [100, 320, 330, 500, 900, 20000],
            defended_bonus: 5,
            undefended_penalty: 5,
            central_king_penalty: 30,
            castled_bonus: 40,
            pawn_shield_bonus: 30,
            check_bonus: 200,
            mate_score: MATE_SCORE,
        }
    }
}

impl EvalWeights {
    #[inline]
    pub const fn piece_value(&self, kind: PieceKind) -> i32 {
        self.piece_values[kind.index()]
    }
}

#[inline]
pub fn evaluate(board: &BoardState, perspective: Color) -> i32 {
    evaluate_with(board, perspective, &EvalWeights::default())
}

pub fn evaluate_with(board: &BoardState, perspective: Color, weights: &EvalWeights) -> i32 {
    let mut score = 0i32;

    for (square, piece) in board.pieces() {
        let mut value = weights.piece_value(piece.kind);
        if piece.kind != PieceKind::King {
            value += if is_defended(board, square, piece.color) {
                weights.defended_bonus
            } else {
                -weights.undefended_penalty
            };
        }
        score += if piece.color == perspective { value } else { -value };
    }

    score += king_safety(board, perspective, weights);
    score -= king_safety(board, perspective.flip(), weights);

    for (side, sign) in [(perspective.flip(), 1), (perspective, -1)] {
        if is_in_check(board, side) {
            score += sign * weights.check_bonus;
            if !has_legal_move(board, side) {
                score += sign * weights.mate_score;
            }
        }
    }

    score
}

/// Whether another piece of `color` covers `square`.
pub fn is_defended(board: &BoardState, square: Square, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| from != square && attacks_square(board, from, square))
}

/// Castled means the king has left its start square for the g- or c-file of
/// its home rank with its own rook beside it on the inner side.
pub fn is_castled(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = find_king(board, color) else {
        return false;
    };
    let moved = board.piece_at(king_sq).is_some_and(|king| king.has_moved);
    if !moved || king_sq.row() != color.home_row() {
        return false;
    }

    let rook_col = match king_sq.col() {
        6 => 5,
        2 => 3,
        _ => return false,
    };
    matches!(
        Square::new(king_sq.row(), rook_col).and_then(|square| board.piece_at(square)),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color
    )
}

fn has_pawn_shield(board: &BoardState, king_sq: Square, color: Color) -> bool {
    (-1i8..=1).all(|d_col| {
        king_sq
            .offset(color.forward(), d_col)
            .and_then(|square| board.piece_at(square))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == color)
    })
}

fn king_safety(board: &BoardState, color: Color, weights: &EvalWeights) -> i32 {
    let Some(king_sq) = find_king(board, color) else {
        return 0;
    };

    if is_castled(board, color) {
        let shield = if has_pawn_shield(board, king_sq, color) {
            weights.pawn_shield_bonus
        } else {
            0
        };
        weights.castled_bonus + shield
    } else if (2..=5).contains(&king_sq.col()) {
        -weights.central_king_penalty
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::make_move;

    fn board(placement: &str) -> BoardState {
        BoardState::from_piece_placement(placement).expect("test placement should parse")
    }

    #[test]
    fn starting_position_is_balanced() {
        let b = BoardState::standard();
        assert_eq!(evaluate(&b, Color::White), 0);
        assert_eq!(evaluate(&b, Color::Black), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
        assert_eq!(evaluate(&b, Color::White), -evaluate(&b, Color::Black));
    }

    #[test]
    fn extra_queen_dominates() {
        let b = board("4k3/8/8/8/8/8/8/3QK3");
        assert!(evaluate(&b, Color::White) > 800);
        assert!(evaluate(&b, Color::Black) < -800);
    }

    #[test]
    fn defended_pieces_score_higher() {
        let loose = board("7k/8/8/8/8/8/8/K1N5");
        let guarded = board("7k/8/8/8/8/8/8/KN6");
        let w = EvalWeights::default();
        assert_eq!(
            evaluate(&guarded, Color::White) - evaluate(&loose, Color::White),
            w.defended_bonus + w.undefended_penalty
        );
    }

    #[test]
    fn castled_king_with_shield_is_rewarded() {
        let mut b = board("4k3/8/8/8/8/8/5PPP/4K2R");
        make_move(&mut b, "e1 g1".parse().expect("move")).expect("king on e1");
        assert!(is_castled(&b, Color::White));
        assert!(!is_castled(&b, Color::Black));

        // A king that walked to g1 without the rook beside it is not castled.
        let walked = board("4k3/8/8/8/8/8/5PPP/6K1");
        assert!(!is_castled(&walked, Color::White));

        let w = EvalWeights::default();
        assert_eq!(king_safety(&b, Color::White, &w), w.castled_bonus + w.pawn_shield_bonus);
        assert_eq!(king_safety(&b, Color::Black, &w), -w.central_king_penalty);
    }

    #[test]
    fn mate_outweighs_material() {
        // Black is mated despite three rooks against a queen.
        let b = board("Q5k1/5ppp/5rrr/8/8/8/8/4K3");
        assert!(evaluate(&b, Color::White) > MATE_SCORE / 2);
    }

    #[test]
    fn check_is_worth_the_fixed_bonus() {
        let quiet = board("4k3/8/8/8/8/8/8/R3K3");
        let checking = board("4k3/8/8/8/8/8/4R3/4K3");
        let w = EvalWeights::default();
        let delta = evaluate(&checking, Color::White) - evaluate(&quiet, Color::White);
        // The checking rook is also guarded by its king.
        assert_eq!(delta, w.check_bonus + w.defended_bonus + w.undefended_penalty);
    }
}
