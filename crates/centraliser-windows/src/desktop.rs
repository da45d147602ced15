use centraliser_core::{Error, Placement, Rect, Result, WindowHandle, WindowSystem};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetDesktopWindow, GetForegroundWindow, GetWindowRect, GetWindowTextW, SWP_SHOWWINDOW,
    SetWindowPos,
};

/// The Win32 window manager seen through `GetForegroundWindow`,
/// `GetWindowRect` and `SetWindowPos`.
///
/// Holds no state: every call goes straight to user32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowSystem;

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.raw() as *mut _)
}

fn handle(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as usize)
}

impl WindowSystem for Win32WindowSystem {
    fn desktop_window(&self) -> Result<WindowHandle> {
        // SAFETY: GetDesktopWindow takes no arguments and returns the
        // root window handle.
        let desktop = unsafe { GetDesktopWindow() };
        if desktop.is_invalid() {
            return Err(Error::query_failed("desktop window", "null handle"));
        }
        Ok(handle(desktop))
    }

    fn focused_window(&self) -> Result<WindowHandle> {
        // SAFETY: GetForegroundWindow takes no arguments. It returns null
        // while focus is changing or when no window is active.
        let focused = unsafe { GetForegroundWindow() };
        if focused.is_invalid() {
            return Err(Error::query_failed("foreground window", "no window has focus"));
        }
        Ok(handle(focused))
    }

    fn bounds(&self, window: WindowHandle) -> Result<Rect> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect writes into a RECT we own. An invalid
        // handle makes the call fail rather than fault.
        unsafe { GetWindowRect(hwnd(window), &mut rc) }
            .map_err(|e| Error::query_failed("window bounds", format!("{window}: {e}")))?;

        Ok(Rect::new(rc.left, rc.top, rc.right, rc.bottom))
    }

    fn set_bounds(&self, window: WindowHandle, placement: &Placement) -> Result<()> {
        centraliser_core::log_debug!(
            "SetWindowPos {window}: ({},{} {}x{})",
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );

        // SAFETY: SetWindowPos with a handle we obtained from the OS.
        // No insert-after window: the window goes to the top of its
        // Z-order group, and SWP_SHOWWINDOW makes it visible.
        unsafe {
            SetWindowPos(
                hwnd(window),
                None,
                placement.x,
                placement.y,
                placement.width,
                placement.height,
                SWP_SHOWWINDOW,
            )
        }
        .map_err(|e| Error::MoveFailed {
            reason: format!("{window}: {e}"),
        })
    }

    fn window_text(&self, window: WindowHandle, max_units: usize) -> Result<String> {
        // +1 for the null terminator GetWindowTextW always writes.
        let mut buffer = vec![0u16; max_units + 1];

        // SAFETY: GetWindowTextW copies at most buffer.len() - 1 UTF-16
        // units plus a terminator into our buffer.
        let copied = unsafe { GetWindowTextW(hwnd(window), &mut buffer) };
        let copied = usize::try_from(copied).unwrap_or(0).min(max_units);

        Ok(String::from_utf16_lossy(&buffer[..copied]))
    }
}
