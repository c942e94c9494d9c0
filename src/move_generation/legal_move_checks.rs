//! King safety queries: attack maps, check, and pin detection.
//!
//! A missing king is tolerated and reads as "not in check". Pin analysis is
//! only a fast rejection: any move it cannot rule out is confirmed by playing
//! it on a cloned board and asking whether the mover's king is attacked.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::moves::chess_move::Move;
use crate::moves::piece_rules::{attacks_square, line_step};

#[inline]
pub fn find_king(board: &BoardState, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

pub fn is_square_attacked(board: &BoardState, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| attacks_square(board, from, square))
}

#[inline]
pub fn is_in_check(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = find_king(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.flip())
}

/// A pin: the enemy slider on `pinner` would see the king along `step`
/// (pointing from the king toward the pinned piece) if the piece moved away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRay {
    pub king: Square,
    pub pinner: Square,
    pub step: (i8, i8),
}

impl PinRay {
    /// Whether `square` lies on the ray strictly past the king and no further than the pinner.
    pub fn contains(&self, square: Square) -> bool {
        let mut current = self.king.offset(self.step.0, self.step.1);
        while let Some(next) = current {
            if next == square {
                return true;
            }
            if next == self.pinner {
                return false;
            }
            current = next.offset(self.step.0, self.step.1);
        }
        false
    }
}

/// Pin ray for the piece on `square`, if it is pinned to its own king.
pub fn pin_ray(board: &BoardState, square: Square) -> Option<PinRay> {
    let piece = board.piece_at(square)?;
    if piece.kind == PieceKind::King {
        return None;
    }
    let king = find_king(board, piece.color)?;
    let step = line_step(king, square)?;
    let diagonal = step.0 != 0 && step.1 != 0;

    // Nothing may stand between the king and the piece.
    let mut current = king.offset(step.0, step.1);
    while let Some(next) = current {
        if next == square {
            break;
        }
        if !board.is_empty_at(next) {
            return None;
        }
        current = next.offset(step.0, step.1);
    }

    // First piece beyond must be an enemy slider moving along this line.
    let mut current = square.offset(step.0, step.1);
    while let Some(next) = current {
        if let Some(other) = board.piece_at(next) {
            let slides_here = match other.kind {
                PieceKind::Queen => true,
                PieceKind::Bishop => diagonal,
                PieceKind::Rook => !diagonal,
                _ => false,
            };
            return (other.color != piece.color && slides_here).then_some(PinRay {
                king,
                pinner: next,
                step,
            });
        }
        current = next.offset(step.0, step.1);
    }

    None
}

#[inline]
pub fn is_pinned(board: &BoardState, square: Square) -> bool {
    pin_ray(board, square).is_some()
}

/// Whether playing `mv` would leave the mover's own king attacked.
pub fn would_expose_check(board: &BoardState, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };

    if let Some(ray) = pin_ray(board, mv.from) {
        if !ray.contains(mv.to) {
            return true;
        }
    }

    let mut next = board.clone();
    if make_move(&mut next, mv).is_none() {
        return false;
    }
    is_in_check(&next, piece.color)
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
    fn finds_kings_and_tolerates_absence() {
        let b = BoardState::standard();
        assert_eq!(find_king(&b, Color::White), Some(sq("e1")));
        assert_eq!(find_king(&b, Color::Black), Some(sq("e8")));

        let kingless = board("8/8/8/8/8/8/8/R7");
        assert_eq!(find_king(&kingless, Color::White), None);
        assert!(!is_in_check(&kingless, Color::White));
    }

    #[test]
    fn pawn_and_knight_attacks_are_seen() {
        let b = board("4k3/8/8/3p4/8/3n4/8/4K3");
        assert!(is_square_attacked(&b, sq("e4"), Color::Black));
        assert!(is_square_attacked(&b, sq("c4"), Color::Black));
        assert!(!is_square_attacked(&b, sq("d4"), Color::Black));
        assert!(is_in_check(&b, Color::White));
    }

    #[test]
    fn adjacent_kings_attack_each_other_without_recursion() {
        let b = board("8/8/8/8/8/8/4k3/4K3");
        assert!(is_in_check(&b, Color::White));
        assert!(is_in_check(&b, Color::Black));
    }

    #[test]
    fn rook_pin_detected_and_respected() {
        // White king e1, bishop e2, black rook e8.
        let b = board("4r2k/8/8/8/8/8/4B3/4K3");
        assert!(is_pinned(&b, sq("e2")));
        assert!(would_expose_check(&b, Move::new(sq("e2"), sq("d3"))));
    }

    #[test]
    fn pinned_knight_has_no_safe_move() {
        let b = board("4r2k/8/8/8/8/8/4N3/4K3");
        assert!(is_pinned(&b, sq("e2")));
        for to in ["c3", "d4", "f4", "g3", "g1", "c1"] {
            assert!(would_expose_check(&b, Move::new(sq("e2"), sq(to))), "{to}");
        }
    }

    #[test]
    fn not_pinned_when_shielded_or_wrong_slider() {
        let shielded = board("4r2k/8/8/4p3/8/8/4B3/4K3");
        assert!(!is_pinned(&shielded, sq("e2")));

        let bishop_on_file = board("4b2k/8/8/8/8/8/4B3/4K3");
        assert!(!is_pinned(&bishop_on_file, sq("e2")));

        let friendly_beyond = board("4R2k/8/8/8/8/8/4B3/4K3");
        assert!(!is_pinned(&friendly_beyond, sq("e2")));

        let king_itself = board("4r2k/8/8/8/8/8/4B3/4K3");
        assert!(!is_pinned(&king_itself, sq("e1")));
    }

    #[test]
    fn diagonal_pin_allows_moves_along_the_line() {
        // White king a1, bishop c3, black bishop f6.
        let b = board("7k/8/5b2/8/8/2B5/8/K7");
        assert!(is_pinned(&b, sq("c3")));
        assert!(!would_expose_check(&b, Move::new(sq("c3"), sq("d4"))));
        assert!(!would_expose_check(&b, Move::new(sq("c3"), sq("f6"))));
        assert!(!would_expose_check(&b, Move::new(sq("c3"), sq("b2"))));
        assert!(would_expose_check(&b, Move::new(sq("c3"), sq("d2"))));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let b = board("4k3/8/8/8/8/8/8/3rK3");
        assert!(!would_expose_check(&b, Move::new(sq("e1"), sq("d1"))));
        assert!(would_expose_check(&b, Move::new(sq("e1"), sq("f1"))));
        assert!(would_expose_check(&b, Move::new(sq("e1"), sq("d2"))));
        assert!(!is_pinned(&b, sq("e1")));
    }

    #[test]
    fn en_passant_discovered_rank_check_is_caught() {
        // White king a5, pawn b5; black pawn c5 just double-pushed; black rook h5.
        let mut b = board("7k/8/8/KPp4r/8/8/8/8");
        b.set_en_passant_target(Some(sq("c6")));
        assert!(would_expose_check(&b, Move::new(sq("b5"), sq("c6"))));
        assert!(!would_expose_check(&b, Move::new(sq("b5"), sq("b6"))));
    }
}
