//! Text protocol handling.
//!
//! Parsing of client command lines and formatting of engine responses. The
//! rules core never depends on this module.

pub mod notation;
pub mod parser;

pub use notation::{format_board, format_outcome, format_stack, parse_coord, ParseError};
pub use parser::{parse_command, Command};
