//! The [`Grid`] type: a fixed-size square array of [`Cell`]s.
//!
//! Cells are stored row-major in one flat buffer. Adjacency is never cached:
//! [`Grid::neighbors`] reads wall state at query time, so walls painted after
//! a previous search are always honoured.

use crate::cell::{Cell, CellState};
use crate::error::Error;
use crate::geom::Position;

/// An N×N grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    dimension: usize,
}

impl Grid {
    /// Create a grid of `dimension`×`dimension` free cells.
    pub fn new(dimension: usize) -> Self {
        let mut cells = Vec::with_capacity(dimension * dimension);
        for row in 0..dimension {
            for col in 0..dimension {
                cells.push(Cell::new(Position::new(row as i32, col as i32)));
            }
        }
        Self { cells, dimension }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether `pos` lies inside `[0, dimension)` on both axes.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let n = self.dimension;
        if pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < n && (pos.col as usize) < n {
            Some(pos.row as usize * n + pos.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn checked_index(&self, pos: Position) -> Result<usize, Error> {
        self.index(pos).ok_or(Error::OutOfBounds {
            pos,
            dimension: self.dimension,
        })
    }

    /// The cell at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// The state at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, pos: Position) -> Option<CellState> {
        self.cell(pos).map(|c| c.state)
    }

    /// Overwrite the state of the cell at `pos`.
    pub fn set_state(&mut self, pos: Position, state: CellState) -> Result<(), Error> {
        let i = self.checked_index(pos)?;
        self.cells[i].state = state;
        Ok(())
    }

    /// Write a search annotation at `pos` unless the cell holds a painted
    /// state (start, end, wall). Returns whether the cell changed.
    pub fn annotate(&mut self, pos: Position, state: CellState) -> bool {
        debug_assert!(state.is_annotation());
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if !cell.state.accepts_annotation() || cell.state == state {
            return false;
        }
        cell.state = state;
        true
    }

    /// Orthogonal neighbours of `pos` that are inside the grid and not walls,
    /// in the order down, up, right, left.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    /// Append the neighbours of `pos` into `buf`. The caller clears `buf`.
    pub fn neighbors_into(&self, pos: Position, buf: &mut Vec<Position>) {
        for n in pos.neighbors_4() {
            if let Some(i) = self.index(n) {
                if !self.cells[i].is_wall() {
                    buf.push(n);
                }
            }
        }
    }

    /// Turn every `Frontier`, `Visited` and `Path` cell back into `Free`.
    /// Start, end and walls are left as they are.
    pub fn reset_search_annotations(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.state.is_annotation() {
                cell.state = CellState::Free;
            }
        }
    }

    /// Count the cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
