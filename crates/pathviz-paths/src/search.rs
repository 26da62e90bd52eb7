use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pathviz_core::{Board, CellState, Error, Grid, Position};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::observer::{Flow, StepObserver};

/// Which priority function drives the search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// Frontier priority of a position reached at `cost`.
    #[inline]
    pub fn priority(self, cost: u32, pos: Position, end: Position) -> u32 {
        match self {
            Self::AStar => cost + manhattan(pos, end),
            Self::Dijkstra => cost,
        }
    }

    /// The other algorithm.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            Self::AStar => Self::Dijkstra,
            Self::Dijkstra => Self::AStar,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar => f.write_str("A*"),
            Self::Dijkstra => f.write_str("Dijkstra"),
        }
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"astar\" or \"dijkstra\")")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Outcome of a search. None of these is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// The end was reached; `length` is the number of steps taken.
    Found { length: usize },
    /// The frontier ran dry before reaching the end.
    NotFound,
    /// The observer asked to stop.
    Cancelled,
}

impl PathResult {
    #[inline]
    pub fn length(self) -> Option<usize> {
        match self {
            Self::Found { length } => Some(length),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Counters from the most recent run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Positions popped from the frontier, including the end.
    pub expanded: usize,
    /// Pushes onto the frontier, including the start.
    pub discovered: usize,
    /// Step-complete hooks invoked.
    pub steps: usize,
}

/// Runs A* and Dijkstra searches.
///
/// The engine only keeps a neighbour scratch buffer and the statistics of the
/// last run between calls; costs, predecessors and the frontier are built
/// fresh for every [`run`](Self::run).
#[derive(Debug, Default)]
pub struct SearchEngine {
    nbuf: Vec<Position>,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent run.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Validate the board's endpoints, then [`run`](Self::run) on its grid.
    ///
    /// A run that is not cancelled marks the board as searched.
    pub fn prepare_and_run<O: StepObserver + ?Sized>(
        &mut self,
        board: &mut Board,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> Result<PathResult, Error> {
        let (start, end) = board.endpoints()?;
        let result = self.run(board.grid_mut(), start, end, algorithm, observer);
        if result != PathResult::Cancelled {
            board.mark_searched();
        }
        Ok(result)
    }

    /// Search for a shortest path from `start` to `end`.
    ///
    /// `start` and `end` must be distinct positions inside the grid. Search
    /// annotations are written into `grid` (never over start, end or wall
    /// cells) and reported to `observer` as they happen. On success every
    /// cell strictly between `end` and `start` is marked `Path`, walking back
    /// from `end`.
    pub fn run<O: StepObserver + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Position,
        end: Position,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> PathResult {
        debug_assert_ne!(start, end, "search endpoints must differ");
        debug_assert!(
            grid.contains(start) && grid.contains(end),
            "search endpoints must lie inside the grid"
        );
        log::debug!("{algorithm} search from {start} to {end}");

        self.stats = SearchStats::default();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut best_cost: HashMap<Position, u32> = HashMap::new();
        let mut frontier = Frontier::new();

        best_cost.insert(start, 0);
        frontier.push(start, algorithm.priority(0, start, end));
        self.stats.discovered += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let result = 'search: loop {
            let Some(current) = frontier.pop() else {
                break 'search PathResult::NotFound;
            };
            self.stats.expanded += 1;
            let current_cost = best_cost.get(&current).copied().unwrap_or(u32::MAX);
            log::trace!("expand {current} at cost {current_cost}");

            if current == end {
                mark_path(grid, &came_from, start, end, observer);
                break 'search PathResult::Found {
                    length: current_cost as usize,
                };
            }

            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);

            for &next in nbuf.iter() {
                let tentative = current_cost.saturating_add(1);
                if tentative >= best_cost.get(&next).copied().unwrap_or(u32::MAX) {
                    continue;
                }
                came_from.insert(next, current);
                best_cost.insert(next, tentative);
                // A queued position keeps the priority it was pushed with.
                if frontier.contains(next) {
                    continue;
                }
                frontier.push(next, algorithm.priority(tentative, next, end));
                self.stats.discovered += 1;
                grid.annotate(next, CellState::Frontier);
                observer.on_state_changed(next, CellState::Frontier);
            }

            if current != start {
                grid.annotate(current, CellState::Visited);
                observer.on_state_changed(current, CellState::Visited);
            }

            self.stats.steps += 1;
            if observer.on_step_complete(grid) == Flow::Cancel {
                break 'search PathResult::Cancelled;
            }
        };

        self.nbuf = nbuf;
        log::debug!("{algorithm} search finished: {result:?}, {:?}", self.stats);
        result
    }
}

/// Walk `came_from` back from `end`, marking every intermediate cell `Path`,
/// then re-mark both endpoints.
fn mark_path<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    came_from: &HashMap<Position, Position>,
    start: Position,
    end: Position,
    observer: &mut O,
) {
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        if current == start {
            break;
        }
        grid.annotate(current, CellState::Path);
        observer.on_state_changed(current, CellState::Path);
    }
    observer.on_state_changed(start, CellState::Start);
    observer.on_state_changed(end, CellState::End);
}
