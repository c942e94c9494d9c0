//! FEN piece-placement field generation and parsing.
//!
//! Only the first FEN field is handled here: ranks 8 to 1 separated by `/`,
//! uppercase White and lowercase Black letters, digits for empty runs.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Piece, Square};

pub fn generate_piece_placement(board: &BoardState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|square| board.piece_at(square));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn parse_piece_placement(placement: &str) -> ChessResult<BoardState> {
    let placement = placement.trim();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidPlacement(format!(
            "expected 8 ranks, found {} in {placement:?}",
            ranks.len()
        )));
    }

    let mut board = BoardState::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0u8;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ChessError::InvalidPlacement(format!(
                        "bad empty-run digit {ch:?} in rank {}",
                        8 - row
                    )));
                }
                col += run as u8;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                    ChessError::InvalidPlacement(format!("unknown piece letter {ch:?}"))
                })?;
                let square = Square::new(row as u8, col).ok_or_else(|| {
                    ChessError::InvalidPlacement(format!("rank {} is too long", 8 - row))
                })?;
                board.set_piece_at(square, Some(piece));
                col += 1;
            }

            if col > 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} is too long",
                    8 - row
                )));
            }
        }

        if col != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "rank {} covers {col} files",
                8 - row
            )));
        }
    }

    Ok(board)
}
