//! Focus rules engine library.
//!
//! Exposes the board representation, players, rules, the `Game` aggregate,
//! legal-move enumeration, and the text protocol used by the `focus` binary.

pub mod board;
pub mod engine;
pub mod game;
pub mod movegen;
pub mod player;
pub mod protocol;
pub mod rules;

pub use board::{Board, Cell, Color, Coord};
pub use game::{Game, GameStatus, SetupError, Snapshot, Turn};
pub use player::{Player, PlayerId};
pub use rules::{DistanceRule, Move, Outcome, RejectReason, RulesConfig};
