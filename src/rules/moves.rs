//! Player commands as values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// A command a player can issue on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Lift the top `count` tokens at `from` and drop them on `to`.
    Stack { from: Coord, to: Coord, count: usize },
    /// Place one reserve token on `to`.
    Reserve { to: Coord },
}

impl Move {
    /// The cell that receives tokens.
    pub fn destination(&self) -> Coord {
        match *self {
            Move::Stack { to, .. } | Move::Reserve { to } => to,
        }
    }
}

/// Formats in protocol syntax without the player name: `move 0,0 0,1 1` or
/// `reserve 2,3`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Stack { from, to, count } => write!(f, "move {} {} {}", from, to, count),
            Move::Reserve { to } => write!(f, "reserve {}", to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_protocol() {
        let m = Move::Stack { from: Coord::new(0, 0), to: Coord::new(0, 1), count: 1 };
        assert_eq!(m.to_string(), "move 0,0 0,1 1");
        assert_eq!(Move::Reserve { to: Coord::new(2, 3) }.to_string(), "reserve 2,3");
    }

    #[test]
    fn destination() {
        let m = Move::Stack { from: Coord::new(4, 4), to: Coord::new(1, 4), count: 3 };
        assert_eq!(m.destination(), Coord::new(1, 4));
    }
}
