//! Players and their off-board counters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Seat of a player. `A` is the player listed first at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    A,
    B,
}

pub const ALL_PLAYERS: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

impl PlayerId {
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::A => write!(f, "A"),
            PlayerId::B => write!(f, "B"),
        }
    }
}

/// A named participant with a token color and reserve/capture tallies.
///
/// Counters are only changed by the rules layer; outside the crate a
/// `Player` is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    reserve: u32,
    captured: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            reserve: 0,
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Own tokens held off the board, available for reserve placements.
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    /// Opponent tokens taken off the board.
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub(crate) fn add_reserve(&mut self, n: u32) {
        self.reserve += n;
    }

    /// Spends one reserve token. Callers check `reserve() > 0` first; an
    /// empty reserve stays at zero.
    pub(crate) fn take_reserve(&mut self) {
        self.reserve = self.reserve.saturating_sub(1);
    }

    pub(crate) fn add_captured(&mut self, n: u32) {
        self.captured += n;
    }
}
