//! The [`Board`]: a [`Grid`] together with the user's chosen endpoints.
//!
//! The board enforces the painting rules the search engine relies on: at most
//! one start and one end, walls everywhere else the user paints. It is the
//! "prepare search" layer: [`Board::endpoints`] is the only way to obtain a
//! validated `(start, end)` pair.

use rand::Rng;

use crate::cell::CellState;
use crate::error::{EndpointIssue, Error};
use crate::geom::Position;
use crate::grid::Grid;

/// A grid plus its start and end markers.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    start: Option<Position>,
    end: Option<Position>,
    searched: bool,
}

impl Board {
    /// An empty `dimension`×`dimension` board.
    pub fn new(dimension: usize) -> Self {
        Self {
            grid: Grid::new(dimension),
            start: None,
            end: None,
            searched: false,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    #[inline]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    fn check(&self, pos: Position) -> Result<(), Error> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            log::warn!("board: ignoring out-of-bounds position {pos}");
            Err(Error::OutOfBounds {
                pos,
                dimension: self.grid.dimension(),
            })
        }
    }

    /// Paint at `pos`: the first paint places the start, the next one the
    /// end, later ones place walls. Painting over an existing endpoint does
    /// nothing.
    ///
    /// Returns the state written, or `None` if the cell was left unchanged.
    pub fn paint(&mut self, pos: Position) -> Result<Option<CellState>, Error> {
        self.check(pos)?;
        let is_start = self.start == Some(pos);
        let is_end = self.end == Some(pos);

        let state = if self.start.is_none() && !is_end {
            self.start = Some(pos);
            CellState::Start
        } else if self.end.is_none() && !is_start {
            self.end = Some(pos);
            CellState::End
        } else if !is_start && !is_end {
            CellState::Wall
        } else {
            return Ok(None);
        };

        if self.grid.at(pos) == Some(state) {
            return Ok(None);
        }
        self.grid.set_state(pos, state)?;
        Ok(Some(state))
    }

    /// Clear the cell at `pos`, forgetting it as start or end.
    pub fn erase(&mut self, pos: Position) -> Result<(), Error> {
        self.check(pos)?;
        if self.start == Some(pos) {
            self.start = None;
        } else if self.end == Some(pos) {
            self.end = None;
        }
        self.grid.set_state(pos, CellState::Free)
    }

    /// The validated `(start, end)` pair.
    pub fn endpoints(&self) -> Result<(Position, Position), Error> {
        let start = self
            .start
            .ok_or(Error::InvalidEndpoints(EndpointIssue::MissingStart))?;
        let end = self
            .end
            .ok_or(Error::InvalidEndpoints(EndpointIssue::MissingEnd))?;
        if start == end {
            return Err(Error::InvalidEndpoints(EndpointIssue::SameCell(start)));
        }
        Ok((start, end))
    }

    /// Whether a search has completed on this board since the last reset.
    #[inline]
    pub fn is_searched(&self) -> bool {
        self.searched
    }

    #[inline]
    pub fn mark_searched(&mut self) {
        self.searched = true;
    }

    /// Replace the grid with a fresh one and forget both endpoints.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.dimension());
        self.start = None;
        self.end = None;
        self.searched = false;
    }

    /// Wipe search annotations, keeping start, end and walls.
    pub fn clear_search(&mut self) {
        self.grid.reset_search_annotations();
        self.searched = false;
    }

    /// Turn each free cell into a wall with probability `density`.
    /// Returns the number of walls placed.
    pub fn scatter_walls<R: Rng>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let free: Vec<Position> = self
            .grid
            .iter()
            .filter(|c| c.state == CellState::Free)
            .map(|c| c.position())
            .collect();

        let mut placed = 0;
        for pos in free {
            let r: f64 = rng.random();
            if r < density && self.grid.set_state(pos, CellState::Wall).is_ok() {
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn paint_order_start_end_wall() {
        let mut b = Board::new(5);
        assert_eq!(b.paint(p(0, 0)), Ok(Some(CellState::Start)));
        assert_eq!(b.paint(p(4, 4)), Ok(Some(CellState::End)));
        assert_eq!(b.paint(p(2, 2)), Ok(Some(CellState::Wall)));
        assert_eq!(b.paint(p(2, 2)), Ok(None));
        assert_eq!(b.start(), Some(p(0, 0)));
        assert_eq!(b.end(), Some(p(4, 4)));
        assert_eq!(b.grid().at(p(2, 2)), Some(CellState::Wall));
    }

    #[test]
    fn paint_over_endpoints_is_noop() {
        let mut b = Board::new(5);
        b.paint(p(1, 1)).unwrap();
        // Start exists, end missing, clicking the start again does nothing.
        assert_eq!(b.paint(p(1, 1)), Ok(None));
        b.paint(p(3, 3)).unwrap();
        assert_eq!(b.paint(p(3, 3)), Ok(None));
        assert_eq!(b.grid().at(p(3, 3)), Some(CellState::End));
    }

    #[test]
    fn erase_forgets_endpoint_and_repaint_restores_it() {
        let mut b = Board::new(5);
        b.paint(p(0, 0)).unwrap();
        b.paint(p(4, 4)).unwrap();
        b.erase(p(0, 0)).unwrap();
        assert_eq!(b.start(), None);
        assert_eq!(b.grid().at(p(0, 0)), Some(CellState::Free));
        // Next paint fills the missing start, not a wall.
        assert_eq!(b.paint(p(2, 3)), Ok(Some(CellState::Start)));
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut b = Board::new(3);
        assert_eq!(
            b.paint(p(3, 1)),
            Err(Error::OutOfBounds {
                pos: p(3, 1),
                dimension: 3
            })
        );
        assert!(b.erase(p(-1, 0)).is_err());
        assert_eq!(b.start(), None);
    }

    #[test]
    fn endpoints_validation() {
        let mut b = Board::new(4);
        assert_eq!(
            b.endpoints(),
            Err(Error::InvalidEndpoints(EndpointIssue::MissingStart))
        );
        b.paint(p(0, 0)).unwrap();
        assert_eq!(
            b.endpoints(),
            Err(Error::InvalidEndpoints(EndpointIssue::MissingEnd))
        );
        b.paint(p(0, 3)).unwrap();
        assert_eq!(b.endpoints(), Ok((p(0, 0), p(0, 3))));
    }

    #[test]
    fn clear_replaces_grid() {
        let mut b = Board::new(4);
        b.paint(p(0, 0)).unwrap();
        b.paint(p(3, 3)).unwrap();
        b.paint(p(1, 1)).unwrap();
        b.grid_mut().annotate(p(2, 2), CellState::Visited);
        b.mark_searched();
        b.clear();
        assert_eq!(b.start(), None);
        assert_eq!(b.end(), None);
        assert!(!b.is_searched());
        assert_eq!(b.grid(), &Grid::new(4));
    }

    #[test]
    fn clear_search_keeps_painting() {
        let mut b = Board::new(4);
        b.paint(p(0, 0)).unwrap();
        b.paint(p(3, 3)).unwrap();
        b.paint(p(1, 1)).unwrap();
        b.grid_mut().annotate(p(2, 2), CellState::Path);
        b.mark_searched();
        b.clear_search();
        assert!(!b.is_searched());
        assert_eq!(b.grid().at(p(2, 2)), Some(CellState::Free));
        assert_eq!(b.grid().at(p(1, 1)), Some(CellState::Wall));
        assert_eq!(b.endpoints(), Ok((p(0, 0), p(3, 3))));
    }

    #[test]
    fn scatter_walls_spares_endpoints() {
        let mut b = Board::new(10);
        b.paint(p(0, 0)).unwrap();
        b.paint(p(9, 9)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let placed = b.scatter_walls(&mut rng, 1.0);
        assert_eq!(placed, 98);
        assert_eq!(b.grid().at(p(0, 0)), Some(CellState::Start));
        assert_eq!(b.grid().at(p(9, 9)), Some(CellState::End));

        let mut b = Board::new(10);
        assert_eq!(b.scatter_walls(&mut rng, 0.0), 0);
    }
}
