//! Tracks desktop and focused-window geometry and centres the focused window.

use crate::{Error, Placement, Rect, Result, WindowHandle, WindowSystem};


/// Largest title buffer, in UTF-16 code units, the centraliser will read.
pub const MAX_TITLE_UNITS: usize = 60_000;

/// Dispatch phase. A trigger moves `Idle -> Centralising -> Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Centralising,
}

/// Handles and rectangles captured from the platform.
///
/// The desktop pair is captured once at attach time. The focused pair is
/// refreshed on every trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub desktop: WindowHandle,
    pub desktop_rect: Rect,
    pub focused: WindowHandle,
    pub focused_rect: Rect,
}

/// A window title as read through the bounded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTitle {
    pub text: String,
    /// The real title was longer than the buffer and has been cut.
    pub truncated: bool,
}

pub struct Centraliser<S: WindowSystem> {
    system: S,
    state: State,
    phase: Phase,
    max_title_units: usize,
}

impl<S: WindowSystem> Centraliser<S> {
    /// Creates a centraliser with null handles and zeroed rectangles.
    pub fn new(system: S, max_title_units: usize) -> Self {
        Self {
            system,
            state: State::default(),
            phase: Phase::Idle,
            max_title_units: max_title_units.clamp(1, MAX_TITLE_UNITS),
        }
    }

    /// Creates a centraliser and captures the desktop handle and bounds.
    pub fn attach(system: S, max_title_units: usize) -> Result<Self> {
        let mut centraliser = Self::new(system, max_title_units);
        centraliser.refresh_desktop()?;
        let rect = centraliser.refresh_rect(centraliser.state.desktop)?;
        centraliser.state.desktop_rect = rect;
        crate::log_info!(
            "desktop {} is {}x{}",
            centraliser.state.desktop,
            rect.width(),
            rect.height()
        );
        Ok(centraliser)
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Re-reads the desktop window handle.
    pub fn refresh_desktop(&mut self) -> Result<WindowHandle> {
        self.state.desktop = self.system.desktop_window()?;
        Ok(self.state.desktop)
    }

    /// Re-reads the handle of the window that currently has focus.
    pub fn refresh_focused_window(&mut self) -> Result<WindowHandle> {
        self.state.focused = self.system.focused_window()?;
        Ok(self.state.focused)
    }

    /// Queries the bounds of `window`, rejecting inverted rectangles.
    pub fn refresh_rect(&self, window: WindowHandle) -> Result<Rect> {
        let rect = self.system.bounds(window)?;
        if !rect.is_valid() {
            return Err(Error::InvalidBounds { rect });
        }
        Ok(rect)
    }

    pub fn screen_width(&self) -> i32 {
        self.state.desktop_rect.width()
    }

    pub fn screen_height(&self) -> i32 {
        self.state.desktop_rect.height()
    }

    pub fn window_width(&self) -> i32 {
        self.state.focused_rect.width()
    }

    pub fn window_height(&self) -> i32 {
        self.state.focused_rect.height()
    }

    /// Top-left corner of the focused window as last captured.
    pub fn window_position(&self) -> (i32, i32) {
        self.state.focused_rect.origin()
    }

    /// Reads the focused window's title, cut to the configured maximum
    /// number of UTF-16 code units.
    ///
    /// One unit more than the limit is requested, so a title that exactly
    /// fills the limit is not reported as truncated.
    pub fn window_title(&self) -> Result<WindowTitle> {
        let focused = self.state.focused;
        let read = self.system.window_text(focused, self.max_title_units + 1)?;
        let (text, truncated) = cut_to_utf16_units(&read, self.max_title_units);
        if truncated {
            crate::log_debug!(
                "title of {focused} truncated to {} UTF-16 units",
                self.max_title_units
            );
        }

        Ok(WindowTitle { text, truncated })
    }

    /// Moves the focused window to the centre of the desktop.
    ///
    /// Only the position changes; the captured width and height are kept.
    /// A window larger than the screen ends up partly off-screen.
    pub fn centralise(&self) -> Result<Placement> {
        let focused = self.state.focused;
        if focused.is_null() {
            return Err(Error::query_failed(
                "focused window",
                "no focused window has been captured",
            ));
        }

        let (width, height) = (self.window_width(), self.window_height());
        let (x, y) = self.state.desktop_rect.centred_origin(width, height);
        let placement = Placement {
            x,
            y,
            width,
            height,
        };

        crate::log_debug!("moving {focused} to ({x}, {y}) keeping {width}x{height}");
        self.system.set_bounds(focused, &placement)?;
        Ok(placement)
    }

    /// Handles one hotkey activation: captures the focused window and
    /// centres it. The phase is back to `Idle` when this returns, even on
    /// failure.
    pub fn handle_trigger(&mut self) -> Result<Placement> {
        self.phase = Phase::Centralising;
        let result = self.refresh_focused().and_then(|_| self.centralise());
        self.phase = Phase::Idle;
        result
    }

    /// Captures the focused window's handle and bounds into the state.
    pub fn refresh_focused(&mut self) -> Result<WindowHandle> {
        let focused = self.refresh_focused_window()?;
        self.state.focused_rect = self.refresh_rect(focused)?;
        Ok(focused)
    }
}

/// Keeps the longest prefix of `text` that fits in `max_units` UTF-16 code
/// units without splitting a character. Returns whether anything was cut.
fn cut_to_utf16_units(text: &str, max_units: usize) -> (String, bool) {
    let mut units = 0;
    for (i, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return (text[..i].to_string(), true);
        }
    }
    (text.to_string(), false)
}
