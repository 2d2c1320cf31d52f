//! Board coordinates.
//!
//! A `Coord` is a `(row, col)` pair. Components are signed so that callers
//! can hand the engine any pair and have it rejected as out of bounds rather
//! than failing to construct.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A `(row, col)` position. Row 0 is the top row, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Every in-bounds coordinate in row-major order.
pub const ALL_COORDS: [Coord; CELL_COUNT] = {
    let mut coords = [Coord { row: 0, col: 0 }; CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        coords[i] = Coord {
            row: i as i32 / BOARD_SIZE,
            col: i as i32 % BOARD_SIZE,
        };
        i += 1;
    }
    coords
};

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Returns true if both components lie in `[0, BOARD_SIZE)`.
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Row-major index into the board's cell array, or None if out of bounds.
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.row * BOARD_SIZE + self.col) as usize)
        } else {
            None
        }
    }

    /// Absolute row and column displacement from `self` to `other`.
    pub fn displacement(self, other: Coord) -> (u32, u32) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Returns the coordinate offset by `(dr, dc)`, which may be out of bounds.
    pub const fn offset(self, dr: i32, dc: i32) -> Coord {
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
