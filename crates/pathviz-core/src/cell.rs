//! The [`Cell`] type: one grid position with a state tag.

use crate::geom::Position;

/// What a cell currently is.
///
/// `Start`, `End` and `Wall` are painted by the user. `Frontier`, `Visited`
/// and `Path` are transient annotations written by a search and wiped by
/// [`Grid::reset_search_annotations`](crate::Grid::reset_search_annotations).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Wall,
    Start,
    End,
    /// Discovered, queued for expansion.
    Frontier,
    /// Fully expanded.
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl CellState {
    /// Whether this tag is a search annotation (`Frontier`, `Visited`, `Path`).
    #[inline]
    pub const fn is_annotation(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Whether this tag was painted by the user (`Start`, `End`, `Wall`).
    #[inline]
    pub const fn is_painted(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Wall)
    }

    /// Whether a search may overwrite a cell in this state with an
    /// annotation.
    #[inline]
    pub const fn accepts_annotation(self) -> bool {
        !self.is_painted()
    }
}

/// A single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    pub state: CellState,
}

impl Cell {
    /// Create a free cell at `position`.
    #[inline]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            state: CellState::Free,
        }
    }

    /// Set the state (builder).
    #[inline]
    pub const fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }

    /// Where this cell sits in its grid.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self.state, CellState::Wall)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let cell = Cell::new(Position::new(3, 7)).with_state(CellState::Wall);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
