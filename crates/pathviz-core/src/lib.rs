//! **pathviz-core**: grid model for the pathviz pathfinding visualizer.
//!
//! This crate holds the data the search engine and the front-end share:
//! positions, per-cell state tags, the square [`Grid`] with its adjacency
//! rule, and the [`Board`] that enforces the painting rules (one start, one
//! end, walls everywhere else) before a search is triggered.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use board::Board;
pub use cell::{Cell, CellState};
pub use error::{EndpointIssue, Error};
pub use geom::Position;
pub use grid::Grid;
