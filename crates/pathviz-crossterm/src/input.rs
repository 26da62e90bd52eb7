//! Input events: [`Input`], [`Key`], [`MouseAction`], [`ModMask`].

/// A terminal cell coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    /// A printable character.
    Char(char),
}

/// Bitmask of modifier keys held during an input event. Only Ctrl is
/// tracked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const CTRL: Self = Self(1 << 1);

    /// Whether this mask contains all bits of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// What the mouse did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Left button pressed.
    Main,
    /// Right button pressed.
    Secondary,
    /// Moved with the left button held.
    DragMain,
    /// Moved with the right button held.
    DragSecondary,
    Release,
}

/// One input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key { key: Key, modifiers: ModMask },
    Mouse { action: MouseAction, pos: Point },
    Resize { width: u16, height: u16 },
}

impl Input {
    /// Whether this is Ctrl-C, which raw mode no longer turns into a signal.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::Key { key: Key::Char('c'), modifiers } if modifiers.contains(ModMask::CTRL)
        )
    }
}
