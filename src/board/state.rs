//! The 6x6 board.
//!
//! Owns one `Cell` per coordinate in a fixed-size array indexed row-major,
//! and exposes the bounds-checked stack primitives the rules layer is built
//! on. The board itself enforces no height limit; overflow is a rules concern.

use super::cell::{Cell, Color};
use super::coord::{Coord, ALL_COORDS, CELL_COUNT};

/// Tallest stack allowed once a command has finished resolving.
pub const MAX_STACK_HEIGHT: usize = 5;

/// Errors from the board's stack primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    #[error("cannot take {requested} tokens from a stack of {available}")]
    InsufficientPieces { requested: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: std::array::from_fn(|i| Cell::empty(ALL_COORDS[i])),
        }
    }

    /// Creates a board in the standard starting position, `first` being the
    /// color of the player listed first.
    pub fn with_layout(first: Color, second: Color) -> Self {
        let mut board = Board::empty();
        board.initialize_layout(first, second);
        board
    }

    /// Places one token on every cell in the paired-row pattern:
    ///
    /// ```text
    /// F F S S F F
    /// S S F F S S
    /// ```
    ///
    /// repeated for rows 2-3 and 4-5.
    fn initialize_layout(&mut self, first: Color, second: Color) {
        for cell in self.cells.iter_mut() {
            let Coord { row, col } = cell.coord();
            let outer_col = matches!(col, 0 | 1 | 4 | 5);
            let even_row = row % 2 == 0;
            let color = if outer_col == even_row { first } else { second };
            cell.push_all(&[color]);
        }
    }

    /// Returns the cell at `coord`.
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell, BoardError> {
        coord
            .index()
            .map(|i| &self.cells[i])
            .ok_or(BoardError::OutOfBounds(coord))
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, BoardError> {
        match coord.index() {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(BoardError::OutOfBounds(coord)),
        }
    }

    /// Pushes `tokens` onto the top of the stack at `coord`, first element lowest.
    pub fn append_tokens(&mut self, coord: Coord, tokens: &[Color]) -> Result<(), BoardError> {
        self.cell_mut(coord)?.push_all(tokens);
        Ok(())
    }

    /// Removes the top `count` tokens at `coord`, returned bottom to top.
    pub fn remove_top_run(&mut self, coord: Coord, count: usize) -> Result<Vec<Color>, BoardError> {
        let cell = self.cell_mut(coord)?;
        if count > cell.height() {
            return Err(BoardError::InsufficientPieces {
                requested: count,
                available: cell.height(),
            });
        }
        Ok(cell.split_top(count))
    }

    /// Removes the bottom token at `coord`. Returns None for an empty cell.
    pub fn pop_bottom(&mut self, coord: Coord) -> Result<Option<Color>, BoardError> {
        Ok(self.cell_mut(coord)?.remove_bottom())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Total number of tokens on the board.
    pub fn token_count(&self) -> usize {
        self.cells.iter().map(Cell::height).sum()
    }

    /// Height of the tallest stack.
    pub fn max_height(&self) -> usize {
        self.cells.iter().map(Cell::height).max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}
