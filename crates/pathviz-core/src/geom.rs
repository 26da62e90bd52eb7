//! Geometry primitive: [`Position`].

use std::fmt;

/// A grid position as a `(row, col)` pair, 0-indexed.
///
/// Coordinates are signed so that positions derived from screen input can be
/// represented (and rejected) even when they fall outside the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in expansion order: down, up, right,
    /// left. No bounds checking is done here.
    #[inline]
    pub const fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift() {
        let a = Position::new(2, 3);
        assert_eq!(a.shift(-2, 1), Position::new(0, 4));
        assert_eq!(a.shift(0, -5), Position::new(2, -2));
    }

    #[test]
    fn neighbors_are_down_up_right_left() {
        let p = Position::new(4, 4);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(5, 4),
                Position::new(3, 4),
                Position::new(4, 5),
                Position::new(4, 3),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(7, 1).to_string(), "(7, 1)");
    }
}
