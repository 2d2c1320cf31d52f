//! Board representation.
//!
//! Contains the coordinate and color types, per-cell token stacks, and the
//! 6x6 board that owns them.

pub mod cell;
pub mod coord;
pub mod state;

pub use cell::{Cell, Color};
pub use coord::{Coord, ALL_COORDS, BOARD_SIZE, CELL_COUNT};
pub use state::{Board, BoardError, MAX_STACK_HEIGHT};
