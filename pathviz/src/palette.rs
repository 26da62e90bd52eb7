//! Colour table for cell states.

use pathviz_core::CellState;
use pathviz_crossterm::{Color, Style};

pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const GREY: Color = Color::from_rgb(128, 128, 128);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const ORANGE: Color = Color::from_rgb(255, 168, 0);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 255);

pub fn color(state: CellState) -> Color {
    match state {
        CellState::Free => WHITE,
        CellState::Wall => BLACK,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Frontier => GREEN,
        CellState::Visited => RED,
        CellState::Path => PURPLE,
    }
}

/// Style of a grid cell in `state`: a solid block of its colour.
#[inline]
pub fn cell_style(state: CellState) -> Style {
    Style::default().with_fg(color(state)).with_bg(color(state))
}

#[inline]
pub fn border_style() -> Style {
    Style::default().with_fg(GREY)
}

pub fn label(state: CellState) -> &'static str {
    match state {
        CellState::Free => "free",
        CellState::Wall => "wall",
        CellState::Start => "start",
        CellState::End => "end",
        CellState::Frontier => "frontier",
        CellState::Visited => "visited",
        CellState::Path => "path",
    }
}
