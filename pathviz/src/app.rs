//! The interactive application: input handling, search animation, redraws.

use std::io;
use std::time::Duration;

use pathviz_core::{Board, CellState, Grid, Position};
use pathviz_crossterm::{Frame, Input, Key, MouseAction, Terminal};
use pathviz_paths::{Algorithm, Flow, PathResult, SearchEngine, StepObserver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::layout::Layout;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Where the application reads input from and draws to.
pub trait Screen {
    /// Size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Wait up to `timeout` for one input event.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>>;

    /// Every pending input event, without blocking.
    fn drain(&mut self) -> io::Result<Vec<Input>>;

    fn clear(&mut self) -> io::Result<()>;

    fn flush(&mut self, frame: &Frame) -> io::Result<()>;
}

impl Screen for Terminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Terminal::size(self)
    }

    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        Terminal::poll(self, timeout)
    }

    fn drain(&mut self) -> io::Result<Vec<Input>> {
        Terminal::drain(self)
    }

    fn clear(&mut self) -> io::Result<()> {
        Terminal::clear(self)
    }

    fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        Terminal::flush(self, frame)
    }
}

// ---------------------------------------------------------------------------
// Search observer
// ---------------------------------------------------------------------------

/// Paints search progress and watches for cancel keys.
struct SearchObserver<'a, S: Screen + ?Sized> {
    screen: &'a mut S,
    layout: Layout,
    delay: Duration,
    dirty: Vec<Position>,
    frame: Frame,
    error: Option<io::Error>,
    quit: bool,
}

impl<'a, S: Screen + ?Sized> SearchObserver<'a, S> {
    fn new(screen: &'a mut S, layout: Layout, delay: Duration) -> Self {
        Self {
            screen,
            layout,
            delay,
            dirty: Vec::new(),
            frame: Frame::new(),
            error: None,
            quit: false,
        }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    fn flush(&mut self) -> bool {
        match self.screen.flush(&self.frame) {
            Ok(()) => true,
            Err(e) => {
                self.error.get_or_insert(e);
                false
            }
        }
    }

    /// Whether pending input asks to stop the search.
    fn cancel_requested(&mut self) -> bool {
        let inputs = match self.screen.drain() {
            Ok(inputs) => inputs,
            Err(e) => {
                self.error.get_or_insert(e);
                return true;
            }
        };
        let mut cancel = false;
        for input in inputs {
            if input.is_interrupt() {
                self.quit = true;
                cancel = true;
            } else if let Input::Key {
                key: Key::Escape | Key::Char('q'),
                ..
            } = input
            {
                cancel = true;
            }
        }
        cancel
    }

    fn finish(self) -> (Option<io::Error>, bool) {
        (self.error, self.quit)
    }
}

impl<S: Screen + ?Sized> StepObserver for SearchObserver<'_, S> {
    fn on_state_changed(&mut self, pos: Position, state: CellState) {
        match state {
            // Repainted from the grid at the end of the step, so an end
            // cell reported as frontier keeps its own colour.
            CellState::Frontier | CellState::Visited => self.dirty.push(pos),
            _ => {
                self.frame.clear();
                view::draw_cell(&mut self.frame, &self.layout, pos, state);
                if self.flush() && state == CellState::Path {
                    self.pause();
                }
            }
        }
    }

    fn on_step_complete(&mut self, grid: &Grid) -> Flow {
        self.frame.clear();
        for pos in self.dirty.drain(..) {
            if let Some(state) = grid.at(pos) {
                view::draw_cell(&mut self.frame, &self.layout, pos, state);
            }
        }
        if !self.flush() {
            return Flow::Cancel;
        }
        self.pause();
        if self.cancel_requested() {
            Flow::Cancel
        } else {
            Flow::Continue
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// What the main loop should do after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    /// Redraw everything over the current screen.
    Redraw,
    /// Clear the screen, then redraw.
    Repaint,
    Search,
    Quit,
}

pub struct App {
    config: Config,
    board: Board,
    engine: SearchEngine,
    algorithm: Algorithm,
    layout: Layout,
    rng: StdRng,
    status: String,
    quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "new {0}x{0} board, wall seed {seed}, {1} selected",
            config.size,
            Algorithm::from(config.algorithm)
        );
        let mut app = Self {
            board: Board::new(config.size),
            engine: SearchEngine::new(),
            algorithm: config.algorithm.into(),
            layout: Layout::new(config.size),
            rng: StdRng::seed_from_u64(seed),
            status: "place a start and an end".to_string(),
            quit: false,
            config,
        };
        if app.config.scatter {
            app.scatter_walls();
        }
        app
    }

    fn scatter_walls(&mut self) {
        let placed = self.board.scatter_walls(&mut self.rng, self.config.walls);
        self.status = format!("{placed} walls scattered");
        log::debug!("{}", self.status);
    }

    /// Apply one input outside of a search.
    pub fn handle(&mut self, input: Input) -> Command {
        if input.is_interrupt() {
            return Command::Quit;
        }
        match input {
            Input::Key { key, .. } => self.handle_key(key),
            Input::Mouse { action, pos } => {
                let Some(cell) = self.layout.cell_at(pos) else {
                    return Command::None;
                };
                match action {
                    MouseAction::Main | MouseAction::DragMain => self.paint(cell),
                    MouseAction::Secondary | MouseAction::DragSecondary => self.erase(cell),
                    _ => Command::None,
                }
            }
            Input::Resize { .. } => Command::Repaint,
        }
    }

    fn handle_key(&mut self, key: Key) -> Command {
        match key {
            Key::Escape | Key::Char('q') => Command::Quit,
            Key::Enter | Key::Space => {
                if self.board.is_searched() {
                    self.status = "press x or c before searching again".to_string();
                    return Command::Redraw;
                }
                match self.board.endpoints() {
                    Ok(_) => Command::Search,
                    Err(e) => {
                        self.status = e.to_string();
                        Command::Redraw
                    }
                }
            }
            Key::Tab | Key::Char('a') => {
                self.algorithm = self.algorithm.toggle();
                self.status = format!("{} selected", self.algorithm);
                Command::Redraw
            }
            Key::Char('c') => {
                self.board.clear();
                self.status = "board cleared".to_string();
                Command::Redraw
            }
            Key::Char('x') => {
                self.board.clear_search();
                self.status = "search cleared".to_string();
                Command::Redraw
            }
            Key::Char('w') => {
                self.scatter_walls();
                Command::Redraw
            }
            _ => Command::None,
        }
    }

    fn paint(&mut self, pos: Position) -> Command {
        match self.board.paint(pos) {
            Ok(Some(state)) => {
                log::debug!("painted {pos} as {state:?}");
                Command::Redraw
            }
            Ok(None) => Command::None,
            Err(e) => {
                self.status = e.to_string();
                Command::Redraw
            }
        }
    }

    fn erase(&mut self, pos: Position) -> Command {
        if self.board.grid().at(pos) == Some(CellState::Free) {
            return Command::None;
        }
        match self.board.erase(pos) {
            Ok(()) => Command::Redraw,
            Err(e) => {
                self.status = e.to_string();
                Command::Redraw
            }
        }
    }

    /// Draw the whole screen.
    pub fn redraw<S: Screen + ?Sized>(&self, screen: &mut S, clear: bool) -> io::Result<()> {
        if clear {
            screen.clear()?;
        }
        let (columns, rows) = screen.size()?;
        let frame = if self.layout.fits(columns, rows) {
            view::render(self.board.grid(), &self.layout, self.algorithm, &self.status)
        } else {
            view::render_too_small(&self.layout)
        };
        screen.flush(&frame)
    }

    /// Run one animated search on the current board.
    pub fn search<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        // Leftovers of a cancelled run.
        self.board.clear_search();
        self.status = format!("{} searching...", self.algorithm);
        self.redraw(screen, false)?;

        let algorithm = self.algorithm;
        let mut observer = SearchObserver::new(screen, self.layout, self.config.delay());
        let outcome = self
            .engine
            .prepare_and_run(&mut self.board, algorithm, &mut observer);
        let (error, quit) = observer.finish();
        if let Some(e) = error {
            return Err(e);
        }
        self.quit |= quit;

        let explored = self.engine.last_stats().expanded;
        self.status = match outcome {
            Ok(PathResult::Found { length }) => {
                format!("{algorithm}: path length {length}, {explored} explored")
            }
            Ok(PathResult::NotFound) => format!("{algorithm}: no path, {explored} explored"),
            Ok(PathResult::Cancelled) => "search cancelled".to_string(),
            Err(e) => e.to_string(),
        };
        log::info!("{}", self.status);
        Ok(())
    }

    /// The main loop: poll, handle, draw, until asked to quit.
    pub fn run<S: Screen + ?Sized>(&mut self, screen: &mut S) -> io::Result<()> {
        self.redraw(screen, true)?;
        while !self.quit {
            let Some(input) = screen.poll(POLL_INTERVAL)? else {
                continue;
            };
            match self.handle(input) {
                Command::None => {}
                Command::Redraw => self.redraw(screen, false)?,
                Command::Repaint => self.redraw(screen, true)?,
                Command::Search => {
                    self.search(screen)?;
                    self.redraw(screen, false)?;
                }
                Command::Quit => self.quit = true,
            }
        }
        log::info!("quitting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use clap::Parser;
    use pathviz_crossterm::{ModMask, Point};

    use super::*;

    /// In-memory screen with scripted input.
    struct FakeScreen {
        size: (u16, u16),
        inputs: VecDeque<Input>,
        /// Returned by successive `drain` calls; empty once exhausted.
        pending: VecDeque<Vec<Input>>,
        frames: Vec<Frame>,
        clears: usize,
    }

    impl FakeScreen {
        fn new(inputs: Vec<Input>) -> Self {
            Self {
                size: (200, 120),
                inputs: inputs.into(),
                pending: VecDeque::new(),
                frames: Vec::new(),
                clears: 0,
            }
        }
    }

    impl Screen for FakeScreen {
        fn size(&self) -> io::Result<(u16, u16)> {
            Ok(self.size)
        }

        fn poll(&mut self, _timeout: Duration) -> io::Result<Option<Input>> {
            // Quit once the script runs out so `run` always terminates.
            Ok(Some(self.inputs.pop_front().unwrap_or(key(Key::Escape))))
        }

        fn drain(&mut self) -> io::Result<Vec<Input>> {
            Ok(self.pending.pop_front().unwrap_or_default())
        }

        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn flush(&mut self, frame: &Frame) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["pathviz", "--size", "5", "--delay-ms", "0", "--seed", "1"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    fn key(key: Key) -> Input {
        Input::Key {
            key,
            modifiers: ModMask::NONE,
        }
    }

    fn ctrl_c() -> Input {
        Input::Key {
            key: Key::Char('c'),
            modifiers: ModMask::CTRL,
        }
    }

    fn click(app: &App, action: MouseAction, row: i32, col: i32) -> Input {
        let pos = app.layout.screen_of(Position::new(row, col)).unwrap();
        Input::Mouse { action, pos }
    }

    fn ready_app() -> App {
        let mut app = App::new(config(&[]));
        for (row, col) in [(0, 0), (4, 4), (2, 2)] {
            let input = click(&app, MouseAction::Main, row, col);
            assert_eq!(app.handle(input), Command::Redraw);
        }
        app
    }

    #[test]
    fn mouse_paints_and_erases() {
        let mut app = ready_app();
        let grid = app.board.grid();
        assert_eq!(grid.at(Position::new(0, 0)), Some(CellState::Start));
        assert_eq!(grid.at(Position::new(4, 4)), Some(CellState::End));
        assert_eq!(grid.at(Position::new(2, 2)), Some(CellState::Wall));

        let drag = click(&app, MouseAction::DragMain, 2, 3);
        assert_eq!(app.handle(drag), Command::Redraw);
        let again = click(&app, MouseAction::DragMain, 2, 3);
        assert_eq!(app.handle(again), Command::None);

        let erase = click(&app, MouseAction::Secondary, 0, 0);
        assert_eq!(app.handle(erase), Command::Redraw);
        assert_eq!(app.board.start(), None);
        let erase_free = click(&app, MouseAction::Secondary, 0, 0);
        assert_eq!(app.handle(erase_free), Command::None);

        let border = Input::Mouse {
            action: MouseAction::Main,
            pos: Point::new(0, 0),
        };
        assert_eq!(app.handle(border), Command::None);
    }

    #[test]
    fn search_requires_endpoints() {
        let mut app = App::new(config(&[]));
        assert_eq!(app.handle(key(Key::Enter)), Command::Redraw);
        assert!(app.status.contains("no start"));
        let start = click(&app, MouseAction::Main, 1, 1);
        app.handle(start);
        assert_eq!(app.handle(key(Key::Space)), Command::Redraw);
        assert!(app.status.contains("no end"));
    }

    #[test]
    fn keys() {
        let mut app = ready_app();
        assert_eq!(app.algorithm, Algorithm::AStar);
        assert_eq!(app.handle(key(Key::Tab)), Command::Redraw);
        assert_eq!(app.algorithm, Algorithm::Dijkstra);
        assert_eq!(app.handle(key(Key::Char('a'))), Command::Redraw);
        assert_eq!(app.algorithm, Algorithm::AStar);
        assert_eq!(app.handle(key(Key::Enter)), Command::Search);
        assert_eq!(
            app.handle(Input::Resize {
                width: 80,
                height: 24
            }),
            Command::Repaint
        );
        assert_eq!(app.handle(key(Key::Char('c'))), Command::Redraw);
        assert_eq!(app.board.start(), None);
        assert_eq!(app.handle(key(Key::Char('z'))), Command::None);
        assert_eq!(app.handle(key(Key::Char('q'))), Command::Quit);
        assert_eq!(app.handle(ctrl_c()), Command::Quit);
    }

    #[test]
    fn scatter_walls_is_seeded() {
        let a = App::new(config(&["--scatter", "--walls", "0.5"]));
        let b = App::new(config(&["--scatter", "--walls", "0.5"]));
        assert_eq!(a.board.grid(), b.board.grid());
        assert!(a.status.ends_with("walls scattered"));
    }

    #[test]
    fn search_runs_to_completion() {
        let mut app = ready_app();
        let mut screen = FakeScreen::new(vec![]);
        app.search(&mut screen).unwrap();
        let explored = app.engine.last_stats().expanded;
        assert_eq!(app.status, format!("A*: path length 8, {explored} explored"));
        assert!(app.board.is_searched());
        assert_eq!(app.board.grid().count(CellState::Path), 7);
        assert!(!app.quit);

        // A finished board refuses a second search until cleared.
        assert_eq!(app.handle(key(Key::Enter)), Command::Redraw);
        app.handle(key(Key::Char('x')));
        assert_eq!(app.handle(key(Key::Enter)), Command::Search);
    }

    #[test]
    fn escape_cancels_search_without_quitting() {
        let mut app = ready_app();
        let mut screen = FakeScreen::new(vec![]);
        screen.pending.push_back(vec![]);
        screen.pending.push_back(vec![key(Key::Escape)]);
        app.search(&mut screen).unwrap();
        assert_eq!(app.status, "search cancelled");
        assert_eq!(app.engine.last_stats().steps, 2);
        assert!(!app.board.is_searched());
        assert!(!app.quit);
    }

    #[test]
    fn ctrl_c_cancels_and_quits() {
        let mut app = ready_app();
        let mut screen = FakeScreen::new(vec![]);
        screen.pending.push_back(vec![ctrl_c()]);
        app.search(&mut screen).unwrap();
        assert_eq!(app.status, "search cancelled");
        assert!(app.quit);
    }

    #[test]
    fn run_loop_end_to_end() {
        let mut app = App::new(config(&["--algorithm", "dijkstra"]));
        let script = vec![
            click(&app, MouseAction::Main, 0, 0),
            click(&app, MouseAction::Main, 4, 4),
            key(Key::Enter),
            key(Key::Char('q')),
        ];
        let mut screen = FakeScreen::new(script);
        app.run(&mut screen).unwrap();
        assert!(app.quit);
        assert!(app.status.starts_with("Dijkstra: path length 8"));
        assert_eq!(screen.clears, 1);
        assert!(!screen.frames.is_empty());
    }

    #[test]
    fn small_terminal_shows_notice() {
        let app = ready_app();
        let mut screen = FakeScreen::new(vec![]);
        screen.size = (10, 5);
        app.redraw(&mut screen, false).unwrap();
        let text: String = screen.frames[0].cells.iter().map(|c| c.ch).collect();
        assert!(text.starts_with("terminal too small"));
    }
}
