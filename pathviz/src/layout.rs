//! Mapping between grid positions and terminal cells.
//!
//! Each grid cell is drawn [`CELL_WIDTH`] columns wide inside a one-cell
//! border at the top-left corner of the screen; the side panel sits to the
//! right of the border.

use pathviz_core::Position;
use pathviz_crossterm::Point;

pub const CELL_WIDTH: u16 = 2;
pub const PANEL_WIDTH: u16 = 38;
pub const PANEL_HEIGHT: u16 = 22;
const PANEL_GAP: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    dimension: u16,
}

impl Layout {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.min(u16::MAX as usize / (CELL_WIDTH as usize + 1)) as u16,
        }
    }

    /// Width and height of the bordered board.
    #[inline]
    pub fn board_size(&self) -> (u16, u16) {
        (self.dimension * CELL_WIDTH + 2, self.dimension + 2)
    }

    /// Smallest terminal `(columns, rows)` that shows everything.
    pub fn required_size(&self) -> (u16, u16) {
        let (w, h) = self.board_size();
        (w + PANEL_GAP + PANEL_WIDTH, h.max(PANEL_HEIGHT))
    }

    #[inline]
    pub fn fits(&self, columns: u16, rows: u16) -> bool {
        let (w, h) = self.required_size();
        columns >= w && rows >= h
    }

    /// Top-left terminal cell of the panel.
    #[inline]
    pub fn panel_origin(&self) -> Point {
        Point::new(self.board_size().0 + PANEL_GAP, 0)
    }

    /// Left terminal cell of grid position `pos`, or `None` outside the grid.
    pub fn screen_of(&self, pos: Position) -> Option<Point> {
        let n = i32::from(self.dimension);
        if pos.row < 0 || pos.col < 0 || pos.row >= n || pos.col >= n {
            return None;
        }
        Some(Point::new(
            1 + pos.col as u16 * CELL_WIDTH,
            1 + pos.row as u16,
        ))
    }

    /// Grid position under terminal cell `p`, or `None` on the border or
    /// outside the board.
    pub fn cell_at(&self, p: Point) -> Option<Position> {
        if p.x == 0 || p.y == 0 {
            return None;
        }
        let col = (p.x - 1) / CELL_WIDTH;
        let row = p.y - 1;
        if col >= self.dimension || row >= self.dimension {
            return None;
        }
        Some(Position::new(i32::from(row), i32::from(col)))
    }
}
