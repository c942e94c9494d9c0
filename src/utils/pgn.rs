//! PGN read/write for game records.
//!
//! Writes the seven-tag roster (plus `SetUp`/`FEN` for games that did not
//! begin from the standard position) and a numbered long-algebraic move list.
//! Reading replays such a record through the legality filter, so any PGN that
//! parses yields a `GameState` consistent with the rules.

use chrono::{Local, NaiveDate};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_PIECE_PLACEMENT;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameStatus;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone)]
pub struct PgnGame {
    /// Tag pairs in file order.
    pub headers: Vec<(String, String)>,
    pub game: GameState,
    pub result: String,
}

impl PgnGame {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// PGN result token for a status, `*` while the game is still running.
pub fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Checkmate {
            winner: Color::White,
        } => "1-0",
        GameStatus::Checkmate {
            winner: Color::Black,
        } => "0-1",
        GameStatus::Stalemate | GameStatus::DrawByRepetition | GameStatus::DrawByFiftyMoveRule => {
            "1/2-1/2"
        }
        GameStatus::Ongoing | GameStatus::Check => "*",
    }
}

/// Serialize `game` dated today (local time).
pub fn write_pgn(game: &GameState, result: &str) -> String {
    write_pgn_with_date(game, result, Local::now().date_naive())
}

pub fn write_pgn_with_date(game: &GameState, result: &str, date: NaiveDate) -> String {
    let result = normalize_result(result);
    let mut headers: Vec<(&str, String)> = vec![
        ("Event", "Casual Game".to_owned()),
        ("Site", "Local".to_owned()),
        ("Date", date.format("%Y.%m.%d").to_string()),
        ("Round", "-".to_owned()),
        ("White", "White".to_owned()),
        ("Black", "Black".to_owned()),
        ("Result", result.to_owned()),
    ];

    let initial_placement = game.initial_board().to_piece_placement_string();
    if initial_placement != STARTING_PIECE_PLACEMENT || game.initial_side() != Color::White {
        headers.push(("SetUp", "1".to_owned()));
        headers.push(("FEN", setup_fen(&initial_placement, game.initial_side())));
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(game.ply_count() + 1);
    // Black-to-move starts shift the numbering by one ply.
    let offset = usize::from(game.initial_side() == Color::Black);
    for (index, mv) in game.moves().enumerate() {
        let ply = index + offset;
        let lan = mv.to_long_algebraic();
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", ply / 2 + 1, lan));
        } else if index == 0 {
            movetext_parts.push(format!("{}... {}", ply / 2 + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Replay a PGN record into a `GameState`.
pub fn read_pgn(text: &str) -> ChessResult<GameState> {
    read_pgn_record(text).map(|record| record.game)
}

pub fn read_pgn_record(text: &str) -> ChessResult<PgnGame> {
    let (headers, movetext) = split_headers_and_movetext(text)?;

    let header = |key: &str| {
        headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    let mut game = if header("SetUp") == Some("1") {
        let fen = header("FEN")
            .ok_or_else(|| ChessError::Pgn("SetUp is 1 but the FEN tag is missing".to_owned()))?;
        let (placement, side) = parse_setup_fen(fen)?;
        GameState::from_placement(placement, side)?
    } else {
        GameState::new()
    };

    let mut result = "*".to_owned();
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        let cleaned = trim_annotation_suffix(strip_move_number_prefix(token));
        if cleaned.is_empty() {
            continue;
        }
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }

        let mv = Move::from_long_algebraic(cleaned)
            .map_err(|err| ChessError::Pgn(format!("bad move token {cleaned:?}: {err}")))?;
        game.try_apply_move(mv)
            .map_err(|err| ChessError::Pgn(format!("move {cleaned} cannot be played: {err}")))?;
    }

    if let Some(tagged) = header("Result") {
        result = normalize_result(tagged).to_owned();
    }

    Ok(PgnGame {
        headers,
        game,
        result,
    })
}

fn setup_fen(placement: &str, side: Color) -> String {
    let side = match side {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{placement} {side} - - 0 1")
}

fn parse_setup_fen(fen: &str) -> ChessResult<(&str, Color)> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| ChessError::Pgn("empty FEN tag".to_owned()))?;
    let side = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(ChessError::Pgn(format!("bad side to move in FEN: {other:?}"))),
    };
    Ok((placement, side))
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ChessError::Pgn(format!("invalid header line: {line}")))?;
    let (key, value_raw) = inner
        .split_once(' ')
        .ok_or_else(|| ChessError::Pgn(format!("header without value: {line}")))?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ChessError::Pgn(format!("unquoted header value: {line}")))?;
    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

/// Separate tag pairs from movetext, dropping `{...}` and `;` comments,
/// `(...)` variations and `%` escape lines. Tag lines count only outside
/// comments and variations.
fn split_headers_and_movetext(text: &str) -> ChessResult<(Vec<(String, String)>, String)> {
    let mut headers = Vec::<(String, String)>::new();
    let mut movetext = String::with_capacity(text.len());
    let mut in_comment = false;
    let mut paren_depth = 0usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if !in_comment && paren_depth == 0 {
            if trimmed.starts_with('[') {
                headers.push(parse_header_line(trimmed)?);
                continue;
            }
            if trimmed.starts_with('%') {
                continue;
            }
        }

        for ch in trimmed.chars() {
            if in_comment {
                if ch == '}' {
                    in_comment = false;
                }
                continue;
            }
            match ch {
                '{' => {
                    in_comment = true;
                    movetext.push(' ');
                }
                ';' => break,
                '(' => {
                    paren_depth += 1;
                    movetext.push(' ');
                }
                ')' => {
                    paren_depth = paren_depth.saturating_sub(1);
                    movetext.push(' ');
                }
                _ if paren_depth == 0 => movetext.push(ch),
                _ => {}
            }
        }
        movetext.push(' ');
    }

    Ok((headers, movetext))
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// `"12.e2e4"` and `"12...e7e5"` carry the number glued to the move.
fn strip_move_number_prefix(token: &str) -> &str {
    match token.find('.') {
        Some(dot) if token[..dot].chars().all(|c| c.is_ascii_digit()) => token[dot..].trim_start_matches('.'),
        _ => token,
    }
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
    }

    fn played(moves: &[&str]) -> GameState {
        let mut game = GameState::new();
        for text in moves {
            assert!(game.apply_move_text(text), "{text} should be legal");
        }
        game
    }

    #[test]
    fn writes_roster_and_numbered_moves() {
        let game = played(&["e2 e4", "e7 e5", "g1 f3"]);
        let pgn = write_pgn_with_date(&game, "*", date());
        assert!(pgn.starts_with("[Event \"Casual Game\"]\n[Site \"Local\"]\n[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(!pgn.contains("SetUp"));
        assert!(pgn.ends_with("1. e2e4 e7e5 2. g1f3 *\n"));
    }

    #[test]
    fn undated_writer_stamps_a_date() {
        let pgn = write_pgn(&GameState::new(), "*");
        let record = read_pgn_record(&pgn).expect("PGN should parse");
        let stamped = record.header("Date").expect("Date tag");
        assert!(NaiveDate::parse_from_str(stamped, "%Y.%m.%d").is_ok(), "{stamped}");
    }

    #[test]
    fn round_trip_from_start_position() {
        let game = played(&["e2 e4", "e7 e5", "g1 f3", "b8 c6", "f1 c4", "g8 f6"]);
        let pgn = write_pgn_with_date(&game, "*", date());
        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.piece_placement_fen(), game.piece_placement_fen());
        assert_eq!(parsed.moves().collect::<Vec<_>>(), game.moves().collect::<Vec<_>>());
        assert_eq!(parsed.side_to_move(), Color::White);
    }

    #[test]
    fn round_trip_from_custom_setup_with_black_to_move() {
        let mut game = GameState::from_placement("4k3/4p3/8/8/8/8/4P3/4K3", Color::Black).expect("placement");
        assert!(game.apply_move_text("e7 e5"));
        assert!(game.apply_move_text("e2 e4"));

        let pgn = write_pgn_with_date(&game, "1/2-1/2", date());
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 1\"]"));
        assert!(pgn.contains("1... e7e5 2. e2e4 1/2-1/2"));

        let record = read_pgn_record(&pgn).expect("PGN should parse");
        assert_eq!(record.result, "1/2-1/2");
        assert_eq!(record.header("Date"), Some("2024.03.09"));
        assert_eq!(record.game.initial_side(), Color::Black);
        assert_eq!(record.game.piece_placement_fen(), game.piece_placement_fen());
    }

    #[test]
    fn reader_skips_comments_variations_and_annotations() {
        let text = "[Event \"x\"]\n\n1. e2e4 {best by test} e7e5 (1... c7c5) 2.g1f3! b8c6?! 0-1\n";
        let record = read_pgn_record(text).expect("PGN should parse");
        assert_eq!(record.game.ply_count(), 4);
        assert_eq!(record.result, "0-1");
    }

    #[test]
    fn reader_rejects_illegal_moves_and_bad_headers() {
        assert!(matches!(read_pgn("1. e2e5 *"), Err(ChessError::Pgn(_))));
        assert!(matches!(read_pgn("1. e7e5 *"), Err(ChessError::Pgn(_))));
        assert!(matches!(read_pgn("[Event x]\n1. e2e4 *"), Err(ChessError::Pgn(_))));
        assert!(matches!(
            read_pgn("[SetUp \"1\"]\n1. e2e4 *"),
            Err(ChessError::Pgn(_))
        ));
    }

    #[test]
    fn result_tokens_follow_status() {
        let mated = played(&["f2 f3", "e7 e5", "g2 g4", "d8 h4"]);
        let token = result_token(mated.status());
        assert_eq!(token, "0-1");
        let pgn = write_pgn_with_date(&mated, token, date());
        assert!(pgn.ends_with("2. g2g4 d8h4 0-1\n"));
        assert_eq!(result_token(GameStatus::Stalemate), "1/2-1/2");
        assert_eq!(normalize_result("2-0"), "*");
    }

    #[test]
    fn parentheses_inside_comments_do_not_open_variations() {
        let record = read_pgn_record("1. e2e4 {see (a} e7e5 2. g1f3 *").expect("PGN should parse");
        assert_eq!(record.game.ply_count(), 3);

        let record =
            read_pgn_record("1. e2e4 (1. d2d4 {a ) in a comment} d7d5) e7e5 *").expect("PGN should parse");
        assert_eq!(record.game.ply_count(), 2);
    }

    #[test]
    fn bracket_lines_inside_comments_are_not_tags() {
        let text = "[Event \"x\"]\n\n1. e2e4 {a long note\n[not a tag]\nends here} e7e5 *\n";
        let record = read_pgn_record(text).expect("PGN should parse");
        assert_eq!(record.headers.len(), 1);
        assert_eq!(record.game.ply_count(), 2);
    }

    #[test]
    fn semicolon_comments_run_to_end_of_line() {
        let text = "1. e2e4 ; king's pawn {not a comment opener\ne7e5 2. g1f3 *\n";
        let record = read_pgn_record(text).expect("PGN should parse");
        assert_eq!(record.game.ply_count(), 3);
    }
}
