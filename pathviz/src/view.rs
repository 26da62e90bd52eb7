//! Drawing the board and the side panel into a [`Frame`].

use pathviz_core::{CellState, Grid, Position};
use pathviz_crossterm::{Frame, Point, Style};
use pathviz_paths::Algorithm;

use crate::layout::{CELL_WIDTH, Layout, PANEL_WIDTH};
use crate::palette;

const HELP: [&str; 9] = [
    "left click   start, end, walls",
    "right click  erase",
    "Enter/Space  run search",
    "Tab/a        switch algorithm",
    "x            clear search",
    "c            clear board",
    "w            scatter walls",
    "q/Esc        quit",
    "             (cancel while searching)",
];

const LEGEND: [CellState; 7] = [
    CellState::Start,
    CellState::End,
    CellState::Wall,
    CellState::Frontier,
    CellState::Visited,
    CellState::Path,
    CellState::Free,
];

/// Push the cell at `pos` drawn in `state`.
pub fn draw_cell(frame: &mut Frame, layout: &Layout, pos: Position, state: CellState) {
    let Some(p) = layout.screen_of(pos) else {
        return;
    };
    let style = palette::cell_style(state);
    for dx in 0..CELL_WIDTH {
        frame.push(Point::new(p.x + dx, p.y), ' ', style);
    }
}

fn draw_border(frame: &mut Frame, layout: &Layout) {
    let (w, h) = layout.board_size();
    let style = palette::border_style();
    for x in 1..w - 1 {
        frame.push(Point::new(x, 0), '─', style);
        frame.push(Point::new(x, h - 1), '─', style);
    }
    for y in 1..h - 1 {
        frame.push(Point::new(0, y), '│', style);
        frame.push(Point::new(w - 1, y), '│', style);
    }
    frame.push(Point::new(0, 0), '┌', style);
    frame.push(Point::new(w - 1, 0), '┐', style);
    frame.push(Point::new(0, h - 1), '└', style);
    frame.push(Point::new(w - 1, h - 1), '┘', style);
}

/// Pad or cut `text` to exactly the panel width.
fn fit(text: &str) -> String {
    let width = PANEL_WIDTH as usize;
    let mut s: String = text.chars().take(width).collect();
    let len = s.chars().count();
    s.extend(std::iter::repeat_n(' ', width - len));
    s
}

fn draw_panel(frame: &mut Frame, layout: &Layout, algorithm: Algorithm, status: &str) {
    let origin = layout.panel_origin();
    let plain = Style::default();
    let bold = Style::default().with_bold(true);
    let mut y = origin.y;
    let line = |frame: &mut Frame, y: &mut u16, text: &str, style: Style| {
        frame.text(Point::new(origin.x, *y), &fit(text), style);
        *y += 1;
    };

    line(frame, &mut y, "pathviz", bold);
    line(frame, &mut y, &format!("algorithm: {algorithm}"), plain);
    line(frame, &mut y, "", plain);
    for h in HELP {
        line(frame, &mut y, h, plain);
    }
    line(frame, &mut y, "", plain);

    for state in LEGEND {
        line(frame, &mut y, "", plain);
        let swatch = palette::cell_style(state);
        frame.push(Point::new(origin.x, y - 1), ' ', swatch);
        frame.push(Point::new(origin.x + 1, y - 1), ' ', swatch);
        frame.text(Point::new(origin.x + 3, y - 1), palette::label(state), plain);
    }

    line(frame, &mut y, "", plain);
    line(frame, &mut y, status, bold);
}

/// The whole screen: border, every grid cell, and the panel.
pub fn render(grid: &Grid, layout: &Layout, algorithm: Algorithm, status: &str) -> Frame {
    let mut frame = Frame::new();
    draw_border(&mut frame, layout);
    for cell in grid {
        draw_cell(&mut frame, layout, cell.position(), cell.state);
    }
    draw_panel(&mut frame, layout, algorithm, status);
    frame
}

/// Shown instead of the board when the terminal is smaller than `layout`
/// needs.
pub fn render_too_small(layout: &Layout) -> Frame {
    let (w, h) = layout.required_size();
    let mut frame = Frame::new();
    frame.text(
        Point::new(0, 0),
        &format!("terminal too small: need {w}x{h}"),
        Style::default().with_bold(true),
    );
    frame
}
