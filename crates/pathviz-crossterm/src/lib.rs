//! Crossterm terminal back-end for pathviz.
//!
//! Provides a [`Terminal`] that puts the terminal into raw/alternate-screen
//! mode, translates crossterm events into [`Input`]s, and writes [`Frame`]s
//! of changed cells.

pub mod input;
pub mod style;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

pub use input::{Input, Key, ModMask, MouseAction, Point};
pub use style::{Color, Style};

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A single cell to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Point,
    pub ch: char,
    pub style: Style,
}

/// A batch of cells to write in one flush.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, pos: Point, ch: char, style: Style) {
        self.cells.push(FrameCell { pos, ch, style });
    }

    /// Push `text` left to right starting at `pos`, one cell per char.
    pub fn text(&mut self, pos: Point, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.push(Point::new(pos.x.saturating_add(i as u16), pos.y), ch, style);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

// ---------------------------------------------------------------------------
// Event translation
// ---------------------------------------------------------------------------

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    if mods.contains(KeyModifiers::CONTROL) {
        ModMask::CTRL
    } else {
        ModMask::NONE
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

/// Translate a crossterm event. Events pathviz has no use for map to `None`.
pub fn translate(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            to_key(code).map(|key| Input::Key {
                key,
                modifiers: to_mod_mask(modifiers),
            })
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.column, me.row);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Drag(MouseButton::Left) => MouseAction::DragMain,
                MouseEventKind::Drag(MouseButton::Right) => MouseAction::DragSecondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                _ => return None,
            };
            Some(Input::Mouse { action, pos })
        }
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// The terminal, owned for the lifetime of the application.
///
/// Dropping an initialised `Terminal` restores the previous terminal state.
pub struct Terminal {
    mouse_enabled: bool,
    active: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    /// Terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for one input event.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(translate(event::read()?))
    }

    /// Drain every pending event without blocking.
    pub fn drain(&mut self) -> io::Result<Vec<Input>> {
        let mut out = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(input) = translate(event::read()?) {
                out.push(input);
            }
        }
        Ok(out)
    }

    /// Wipe the screen.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(
            io::stdout(),
            SetBackgroundColor(CtColor::Reset),
            terminal::Clear(ClearType::All)
        )
    }

    /// Write every cell of `frame`.
    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout();
        for fc in &frame.cells {
            queue!(
                stdout,
                cursor::MoveTo(fc.pos.x, fc.pos.y),
                SetForegroundColor(to_ct_color(fc.style.fg)),
                SetBackgroundColor(to_ct_color(fc.style.bg))
            )?;
            if fc.style.bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.ch))?;
            if fc.style.bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }
        stdout.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            stdout,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
