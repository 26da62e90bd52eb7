//! Observable shortest-path search for the pathviz visualizer.
//!
//! Both algorithms are one label-correcting procedure over the grid's
//! 4-connected, unit-cost adjacency; they differ only in the frontier
//! priority:
//!
//! | [`Algorithm`] | priority |
//! |---|---|
//! | `AStar` | `cost + manhattan(pos, end)` |
//! | `Dijkstra` | `cost` |
//!
//! A search never draws. It writes `Frontier`/`Visited`/`Path` annotations
//! into the grid and reports each one to a [`StepObserver`], whose
//! [`on_step_complete`](StepObserver::on_step_complete) hook is the single
//! point where the caller can repaint or cancel.

mod distance;
mod frontier;
mod observer;
mod search;

pub use distance::manhattan;
pub use frontier::Frontier;
pub use observer::{Event, Flow, NoopObserver, Recorder, StepObserver};
pub use search::{Algorithm, ParseAlgorithmError, PathResult, SearchEngine, SearchStats};
