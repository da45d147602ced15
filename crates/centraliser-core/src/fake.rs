//! In-memory `WindowSystem` used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{Error, Placement, Rect, Result, WindowHandle, WindowSystem};

pub(crate) const DESKTOP: WindowHandle = WindowHandle::from_raw(0x10);

struct FakeWindow {
    rect: Rect,
    title: String,
}

/// A desktop with a fixed screen and a set of windows, one of which may
/// have focus. Moves are applied to the stored rectangles and recorded.
pub(crate) struct FakeDesktop {
    screen: Rect,
    windows: RefCell<HashMap<WindowHandle, FakeWindow>>,
    focused: Cell<WindowHandle>,
    pub(crate) moves: RefCell<Vec<(WindowHandle, Placement)>>,
    pub(crate) reject_moves: Cell<bool>,
}

impl FakeDesktop {
    pub(crate) fn new(screen: Rect) -> Self {
        Self {
            screen,
            windows: RefCell::new(HashMap::new()),
            focused: Cell::new(WindowHandle::NULL),
            moves: RefCell::new(Vec::new()),
            reject_moves: Cell::new(false),
        }
    }

    /// Adds a window and gives it focus.
    pub(crate) fn open(&self, raw: usize, rect: Rect, title: &str) -> WindowHandle {
        let handle = WindowHandle::from_raw(raw);
        self.windows.borrow_mut().insert(
            handle,
            FakeWindow {
                rect,
                title: title.into(),
            },
        );
        self.focused.set(handle);
        handle
    }

    pub(crate) fn focus(&self, handle: WindowHandle) {
        self.focused.set(handle);
    }

    pub(crate) fn rect_of(&self, handle: WindowHandle) -> Option<Rect> {
        self.windows.borrow().get(&handle).map(|w| w.rect)
    }
}

impl WindowSystem for FakeDesktop {
    fn desktop_window(&self) -> Result<WindowHandle> {
        Ok(DESKTOP)
    }

    fn focused_window(&self) -> Result<WindowHandle> {
        let handle = self.focused.get();
        if handle.is_null() {
            return Err(Error::query_failed("foreground window", "no window has focus"));
        }
        Ok(handle)
    }

    fn bounds(&self, window: WindowHandle) -> Result<Rect> {
        if window == DESKTOP {
            return Ok(self.screen);
        }
        self.rect_of(window)
            .ok_or_else(|| Error::query_failed("window bounds", format!("no window {window}")))
    }

    fn set_bounds(&self, window: WindowHandle, placement: &Placement) -> Result<()> {
        if self.reject_moves.get() {
            return Err(Error::MoveFailed {
                reason: "access denied".into(),
            });
        }
        let mut windows = self.windows.borrow_mut();
        let Some(target) = windows.get_mut(&window) else {
            return Err(Error::MoveFailed {
                reason: format!("no window {window}"),
            });
        };
        target.rect = Rect::new(
            placement.x,
            placement.y,
            placement.x + placement.width,
            placement.y + placement.height,
        );
        self.moves.borrow_mut().push((window, *placement));
        Ok(())
    }

    fn window_text(&self, window: WindowHandle, max_units: usize) -> Result<String> {
        let windows = self.windows.borrow();
        let Some(w) = windows.get(&window) else {
            return Ok(String::new());
        };
        let mut units = 0;
        Ok(w.title
            .chars()
            .take_while(|ch| {
                units += ch.len_utf16();
                units <= max_units
            })
            .collect())
    }
}
