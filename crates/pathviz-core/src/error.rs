//! Error types for grid and board operations.

use thiserror::Error;

use crate::geom::Position;

/// Why a board cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    MissingStart,
    MissingEnd,
    /// Start and end are the same cell.
    SameCell(Position),
}

impl std::fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell has been placed"),
            Self::MissingEnd => f.write_str("no end cell has been placed"),
            Self::SameCell(p) => write!(f, "start and end are both {p}"),
        }
    }
}

/// Errors raised by [`Grid`](crate::Grid) and [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A position lies outside `[0, dimension)` on either axis.
    #[error("position {pos} is outside the {dimension}x{dimension} grid")]
    OutOfBounds { pos: Position, dimension: usize },
    /// The board is not ready for a search.
    #[error("invalid endpoints: {0}")]
    InvalidEndpoints(EndpointIssue),
}
