//! Game record read/write for saving and reloading a game.
//!
//! The format is PGN-flavored: `[Key "Value"]` header lines followed by
//! movetext of long algebraic moves (`1. e2e4 e7e5 2. g1f3 *`). Comments in
//! braces and move-number tokens are skipped on read. Replay is done by the
//! controller, which owns the rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{GameMode, GameState, Square};
use crate::timing::clock_config::ClockConfig;
use crate::utils::algebraic::{long_algebraic_to_squares, move_to_long_algebraic};

pub const HEADER_EVENT: &str = "Event";
pub const HEADER_DATE: &str = "Date";
pub const HEADER_MODE: &str = "Mode";
pub const HEADER_INITIAL_MINUTES: &str = "InitialMinutes";
pub const HEADER_INCREMENT: &str = "Increment";
pub const HEADER_RESULT: &str = "Result";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub moves: Vec<(Square, Square)>,
}

impl GameRecord {
    /// Mode named in the headers; `HumanVsHuman` when absent.
    pub fn mode(&self) -> ChessResult<GameMode> {
        match self.headers.get(HEADER_MODE) {
            Some(token) => GameMode::from_token(token),
            None => Ok(GameMode::HumanVsHuman),
        }
    }

    /// Clock settings named in the headers, falling back to defaults.
    pub fn clock_config(&self) -> ChessResult<ClockConfig> {
        let mut config = ClockConfig::default();
        for name in [HEADER_INITIAL_MINUTES, HEADER_INCREMENT] {
            if let Some(value) = self.headers.get(name) {
                config.set_option(name, value)?;
            }
        }
        Ok(config)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.headers
            .get(HEADER_DATE)
            .and_then(|value| NaiveDate::parse_from_str(value, "%Y.%m.%d").ok())
    }
}

pub fn write_game_record(state: &GameState, clock_config: &ClockConfig, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert(HEADER_EVENT.to_owned(), "Casual Game".to_owned());
    headers.insert(HEADER_DATE.to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert(HEADER_MODE.to_owned(), mode_token(state.mode).to_owned());
    headers.insert(
        HEADER_INITIAL_MINUTES.to_owned(),
        clock_config.initial_minutes.to_string(),
    );
    headers.insert(
        HEADER_INCREMENT.to_owned(),
        clock_config.increment_seconds.to_string(),
    );
    headers.insert(HEADER_RESULT.to_owned(), "*".to_owned());

    let moves: Vec<(Square, Square)> = state.history.iter().map(|mv| (mv.from, mv.to)).collect();
    write_game_record_with_headers(&moves, &headers)
}

pub fn write_game_record_with_headers(
    moves: &[(Square, Square)],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, (from, to)) in moves.iter().enumerate() {
        let lan = move_to_long_algebraic(*from, *to);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }
    movetext_parts.push("*".to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

pub fn read_game_record(text: &str) -> ChessResult<GameRecord> {
    let mut record = GameRecord::default();
    let mut movetext_lines = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            record.headers.insert(key, value);
        } else {
            movetext_lines.push(trimmed);
        }
    }

    let movetext = strip_comments(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            break;
        }
        record.moves.push(long_algebraic_to_squares(token)?);
    }

    Ok(record)
}

fn mode_token(mode: GameMode) -> &'static str {
    match mode {
        GameMode::HumanVsHuman => "hvh",
        GameMode::HumanVsAi => "ai",
    }
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let invalid = || ChessErrors::InvalidRecord(format!("bad header line: {line}"));

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;

    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => depth = depth.saturating_add(1),
            '}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
