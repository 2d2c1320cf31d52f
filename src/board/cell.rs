//! Token colors and per-cell stacks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// An opaque token identity. Each game uses exactly two, one per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl Color {
    pub const fn new(c: char) -> Self {
        Color(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }

    /// False for whitespace and the `-` / `.` empty-cell markers used in
    /// text notation. Games only accept token colors.
    pub fn is_token(self) -> bool {
        !self.0.is_whitespace() && self.0 != '-' && self.0 != '.'
    }
}

impl From<char> for Color {
    fn from(c: char) -> Self {
        Color(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One board square and the stack of tokens on it, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    stack: Vec<Color>,
}

impl Cell {
    pub(super) fn empty(coord: Coord) -> Self {
        Cell {
            coord,
            stack: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Tokens bottom to top.
    pub fn tokens(&self) -> &[Color] {
        &self.stack
    }

    pub fn height(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The controlling token, if any.
    pub fn top(&self) -> Option<Color> {
        self.stack.last().copied()
    }

    pub(super) fn push_all(&mut self, tokens: &[Color]) {
        self.stack.extend_from_slice(tokens);
    }

    /// Splits off the top `count` tokens. Caller checks `count <= height`.
    pub(super) fn split_top(&mut self, count: usize) -> Vec<Color> {
        let at = self.stack.len() - count;
        self.stack.split_off(at)
    }

    pub(super) fn remove_bottom(&mut self) -> Option<Color> {
        if self.stack.is_empty() {
            None
        } else {
            Some(self.stack.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Color = Color('R');
    const G: Color = Color('G');

    #[test]
    fn split_top_keeps_order() {
        let mut cell = Cell::empty(Coord::new(0, 0));
        cell.push_all(&[R, G, R, G]);
        let run = cell.split_top(3);
        assert_eq!(run, vec![G, R, G]);
        assert_eq!(cell.tokens(), &[R]);
        assert_eq!(cell.top(), Some(R));
    }

    #[test]
    fn remove_bottom_on_empty() {
        let mut cell = Cell::empty(Coord::new(1, 1));
        assert_eq!(cell.remove_bottom(), None);
        cell.push_all(&[G, R]);
        assert_eq!(cell.remove_bottom(), Some(G));
        assert_eq!(cell.tokens(), &[R]);
    }

    #[test]
    fn marker_chars_are_not_tokens() {
        assert!(R.is_token());
        assert!(!Color('-').is_token());
        assert!(!Color('.').is_token());
        assert!(!Color(' ').is_token());
    }

    #[test]
    fn color_display() {
        assert_eq!(R.to_string(), "R");
        assert_eq!(Color::from('x').as_char(), 'x');
    }
}
