use pathviz_core::{CellState, Grid, Position};

/// Whether a search should keep going after a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancel,
}

/// Receives the progress of a search.
pub trait StepObserver {
    /// A cell became `Frontier`, `Visited` or `Path`, or (after a path is
    /// found) was re-marked `Start`/`End`.
    fn on_state_changed(&mut self, pos: Position, state: CellState);

    /// Called once per expanded cell with the current grid snapshot. This is
    /// the only suspension point of a search; returning [`Flow::Cancel`]
    /// aborts it.
    fn on_step_complete(&mut self, grid: &Grid) -> Flow;
}

/// Observer that ignores everything and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_state_changed(&mut self, _pos: Position, _state: CellState) {}

    fn on_step_complete(&mut self, _grid: &Grid) -> Flow {
        Flow::Continue
    }
}

/// One observed notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Changed(Position, CellState),
    Step,
}

/// Observer that records every notification, optionally cancelling after a
/// fixed number of steps.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    steps: usize,
    cancel_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that cancels on its `steps`-th step.
    pub fn cancel_after(steps: usize) -> Self {
        Self {
            cancel_after: Some(steps),
            ..Self::default()
        }
    }

    /// Number of step-complete hooks seen.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Positions reported with `state`, in notification order.
    pub fn positions(&self, state: CellState) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::Changed(p, s) if s == state => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl StepObserver for Recorder {
    fn on_state_changed(&mut self, pos: Position, state: CellState) {
        self.events.push(Event::Changed(pos, state));
    }

    fn on_step_complete(&mut self, _grid: &Grid) -> Flow {
        self.steps += 1;
        self.events.push(Event::Step);
        match self.cancel_after {
            Some(n) if self.steps >= n => Flow::Cancel,
            _ => Flow::Continue,
        }
    }
}
