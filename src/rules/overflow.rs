//! Overflow resolution.
//!
//! After a command lands tokens on a cell, the stack is trimmed from the
//! bottom until it is back at `MAX_STACK_HEIGHT`. Each removed token goes to
//! the acting player: own color to reserve, opponent color to captures.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, BoardError, Coord, MAX_STACK_HEIGHT};
use crate::player::Player;

/// Tokens routed off the board by a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverflowReport {
    pub reserved: u32,
    pub captured: u32,
}

impl OverflowReport {
    pub fn removed(&self) -> u32 {
        self.reserved + self.captured
    }
}

/// Trims the stack at `coord` to `MAX_STACK_HEIGHT`, crediting `actor`.
pub fn resolve_overflow(
    board: &mut Board,
    actor: &mut Player,
    coord: Coord,
) -> Result<OverflowReport, BoardError> {
    let mut report = OverflowReport::default();

    while board.cell_at(coord)?.height() > MAX_STACK_HEIGHT {
        let Some(token) = board.pop_bottom(coord)? else {
            break;
        };
        if token == actor.color() {
            actor.add_reserve(1);
            report.reserved += 1;
        } else {
            actor.add_captured(1);
            report.captured += 1;
        }
        trace!(%coord, %token, player = actor.name(), "overflow token removed");
    }

    Ok(report)
}
