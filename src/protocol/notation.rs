//! Text notation for coordinates, colors, stacks, and outcomes.
//!
//! Coordinates are written `row,col` (for example `0,4`). A stack is written
//! bottom to top as one character per token, or `-` when empty.

use crate::board::{Color, Coord, BOARD_SIZE};
use crate::game::Game;
use crate::rules::Outcome;

/// Errors parsing protocol arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 'row,col', got '{0}'")]
    InvalidCoord(String),

    #[error("color must be a single character, got '{0}'")]
    InvalidColor(String),

    #[error("invalid count: '{0}'")]
    InvalidCount(String),
}

/// Parses `row,col`. Components may be negative or off the board; bounds are
/// a rules concern.
pub fn parse_coord(s: &str) -> Result<Coord, ParseError> {
    let invalid = || ParseError::InvalidCoord(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok(Coord::new(row, col))
}

pub fn parse_color(s: &str) -> Result<Color, ParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if Color(c).is_token() => Ok(Color(c)),
        _ => Err(ParseError::InvalidColor(s.to_string())),
    }
}

pub fn parse_count(s: &str) -> Result<usize, ParseError> {
    s.parse::<usize>()
        .map_err(|_| ParseError::InvalidCount(s.to_string()))
}

/// Formats a stack bottom to top, `-` if empty.
pub fn format_stack(tokens: &[Color]) -> String {
    if tokens.is_empty() {
        return "-".to_string();
    }
    tokens.iter().map(|c| c.as_char()).collect()
}

/// Formats the board as six lines of space-separated stacks, `.` for empty.
pub fn format_board(game: &Game) -> Vec<String> {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let stack = game.piece_stack(Coord::new(row, col));
                    if stack.is_empty() {
                        ".".to_string()
                    } else {
                        format_stack(stack)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// `success`, `win <name>`, or `rejected <tag>`.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success => "success".to_string(),
        Outcome::Win(name) => format!("win {}", name),
        Outcome::Rejected(reason) => format!("rejected {}", reason.tag()),
    }
}
