//! Rules: configuration, commands, move legality, overflow resolution, and
//! outcomes.

pub mod config;
pub mod legality;
pub mod moves;
pub mod outcome;
pub mod overflow;

pub use config::{DistanceRule, RulesConfig};
pub use legality::check_move;
pub use moves::Move;
pub use outcome::{Outcome, RejectReason};
pub use overflow::{resolve_overflow, OverflowReport};

/// Captures a player needs to strictly exceed to win.
pub const WIN_CAPTURE_THRESHOLD: u32 = 5;
