//! Command parser for the text protocol.
//!
//! Turns raw input lines into `Command` values for the main loop. Empty,
//! unknown, or malformed lines yield `None` and a warning in the log.

use tracing::warn;

use crate::board::{Color, Coord};
use crate::rules::Move;

use super::notation::{parse_color, parse_coord, parse_count, ParseError};

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine replies `readyok`.
    IsReady,

    /// `newgame <nameA> <colorA> <nameB> <colorB>`
    NewGame {
        first: (String, Color),
        second: (String, Color),
    },

    /// `setoption name <id> [value <x>]`, applied to the next game.
    SetOption { name: String, value: Option<String> },

    /// `move <name> <r,c> <r,c> <n>` or `reserve <name> <r,c>`.
    Play { player: String, mv: Move },

    /// `stack <r,c>`
    ShowStack { coord: Coord },

    /// `reserve? <name>`
    ShowReserve { player: String },

    /// `captured? <name>`
    ShowCaptured { player: String },

    /// `board`
    ShowBoard,

    /// `json`
    Json,

    /// `moves <name>`
    ListMoves { player: String },

    Quit,
}

/// Parses a single line of input into a `Command`.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    let parsed = match head {
        "isready" => Ok(Some(Command::IsReady)),
        "quit" => Ok(Some(Command::Quit)),
        "board" => Ok(Some(Command::ShowBoard)),
        "json" => Ok(Some(Command::Json)),

        "newgame" => parse_newgame(args),
        "setoption" => Ok(parse_setoption(args)),
        "move" => parse_move(args),
        "reserve" => parse_reserve(args),
        "stack" => match args {
            [coord] => parse_coord(coord).map(|coord| Some(Command::ShowStack { coord })),
            _ => Ok(None),
        },
        "reserve?" => Ok(single_name(args).map(|player| Command::ShowReserve { player })),
        "captured?" => Ok(single_name(args).map(|player| Command::ShowCaptured { player })),
        "moves" => Ok(single_name(args).map(|player| Command::ListMoves { player })),

        other => {
            warn!("unknown command: {}", other);
            return None;
        }
    };

    match parsed {
        Ok(Some(cmd)) => Some(cmd),
        Ok(None) => {
            warn!("malformed {}: wrong number of arguments", head);
            None
        }
        Err(e) => {
            warn!("malformed {}: {}", head, e);
            None
        }
    }
}

fn single_name(args: &[&str]) -> Option<String> {
    match args {
        [name] => Some(name.to_string()),
        _ => None,
    }
}

/// Parses `newgame <nameA> <colorA> <nameB> <colorB>`.
fn parse_newgame(args: &[&str]) -> Result<Option<Command>, ParseError> {
    let [name_a, color_a, name_b, color_b] = args else {
        return Ok(None);
    };
    Ok(Some(Command::NewGame {
        first: (name_a.to_string(), parse_color(color_a)?),
        second: (name_b.to_string(), parse_color(color_b)?),
    }))
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(args: &[&str]) -> Option<Command> {
    let ["name", rest @ ..] = args else {
        return None;
    };
    let value_idx = rest.iter().position(|&t| t == "value");
    let (name_parts, value) = match value_idx {
        Some(vi) => {
            let value_parts = &rest[vi + 1..];
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (&rest[..vi], value)
        }
        None => (rest, None),
    };
    if name_parts.is_empty() {
        return None;
    }
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `move <name> <r,c> <r,c> <n>`.
fn parse_move(args: &[&str]) -> Result<Option<Command>, ParseError> {
    let [player, from, to, count] = args else {
        return Ok(None);
    };
    let mv = Move::Stack {
        from: parse_coord(from)?,
        to: parse_coord(to)?,
        count: parse_count(count)?,
    };
    Ok(Some(Command::Play {
        player: player.to_string(),
        mv,
    }))
}

/// Parses `reserve <name> <r,c>`.
fn parse_reserve(args: &[&str]) -> Result<Option<Command>, ParseError> {
    let [player, to] = args else {
        return Ok(None);
    };
    Ok(Some(Command::Play {
        player: player.to_string(),
        mv: Move::Reserve { to: parse_coord(to)? },
    }))
}
