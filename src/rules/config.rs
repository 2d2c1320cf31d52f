//! Rule variants selectable per game.

use serde::{Deserialize, Serialize};

/// How the claimed move distance relates to the squares travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceRule {
    /// Travel at most `distance` squares. A caller may lift more tokens than
    /// squares moved.
    #[default]
    AtLeast,
    /// Travel exactly `distance` squares, as in tabletop Focus.
    Exact,
}

impl DistanceRule {
    /// Parses the protocol option value (`atleast` / `exact`, any case).
    pub fn from_option(value: &str) -> Option<DistanceRule> {
        match value.to_ascii_lowercase().as_str() {
            "atleast" => Some(DistanceRule::AtLeast),
            "exact" => Some(DistanceRule::Exact),
            _ => None,
        }
    }
}

/// Per-game rule options. The default reproduces the reference rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    pub distance_rule: DistanceRule,
    /// Reject every command once a player has won.
    pub lock_on_win: bool,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_distance_rule(mut self, rule: DistanceRule) -> Self {
        self.distance_rule = rule;
        self
    }

    #[must_use]
    pub fn with_lock_on_win(mut self, lock: bool) -> Self {
        self.lock_on_win = lock;
        self
    }
}
