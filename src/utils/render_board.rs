//! Plain-text board renderer for terminals, logs and test failure output.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Square;

/// Render the board as an 8x8 grid, rank 8 at the top.
///
/// White pieces are uppercase, Black lowercase, empty squares `.`; rank
/// labels run down the left edge and file labels along the bottom.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::with_capacity(8 * 18 + 18);

    for row in 0..8u8 {
        out.push(char::from(b'8' - row));
        out.push(' ');
        for col in 0..8u8 {
            let ch = Square::new(row, col)
                .and_then(|square| board.piece_at(square))
                .map_or('.', |piece| piece.fen_char());
            out.push(ch);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_starting_position() {
        let text = render_board(&BoardState::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[1], "7 p p p p p p p p");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn renders_empty_board() {
        let text = render_board(&BoardState::empty());
        assert!(text.lines().take(8).all(|line| line.ends_with(". . . . . . . .")));
    }
}
