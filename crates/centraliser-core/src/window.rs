use std::fmt;

use crate::{Rect, Result};

/// Opaque identifier for an OS window.
///
/// The handle is not owned: it is only used to address queries and move
/// requests. Zero is the platform's "no window" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    pub const NULL: Self = Self(0);

    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// A reposition request: new top-left corner plus the size to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Window-management capabilities of the host platform.
///
/// `centraliser-windows` implements this over Win32. Tests substitute a
/// fake so the centering logic runs without a display.
pub trait WindowSystem {
    /// Returns the root window covering the whole screen.
    fn desktop_window(&self) -> Result<WindowHandle>;

    /// Returns the window currently receiving keyboard input.
    fn focused_window(&self) -> Result<WindowHandle>;

    /// Returns the window's bounding rectangle in screen coordinates.
    fn bounds(&self, window: WindowHandle) -> Result<Rect>;

    /// Moves and sizes the window, making it visible in the same call.
    fn set_bounds(&self, window: WindowHandle, placement: &Placement) -> Result<()>;

    /// Reads at most `max_units` UTF-16 code units of the window title.
    fn window_text(&self, window: WindowHandle, max_units: usize) -> Result<String>;
}
