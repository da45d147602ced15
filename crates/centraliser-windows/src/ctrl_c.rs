//! Ctrl+C handling through `SetConsoleCtrlHandler`.

use std::sync::OnceLock;
use std::sync::mpsc::Sender;

use centraliser_core::{Error, Event, Result};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};

/// Written once by `set_handler`, read by the console callback.
static SENDER: OnceLock<Sender<Event>> = OnceLock::new();

/// Sends `Event::Shutdown` on `tx` when Ctrl+C or Ctrl+Break is pressed.
pub fn set_handler(tx: Sender<Event>) -> Result<()> {
    SENDER
        .set(tx)
        .map_err(|_| Error::EventLoop("Ctrl+C handler already installed".into()))?;

    // SAFETY: installs a process-wide console control handler that only
    // reads the static sender.
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }
        .map_err(|e| Error::EventLoop(format!("failed to set Ctrl+C handler: {e}")))
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if (ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
        && let Some(tx) = SENDER.get()
    {
        let _ = tx.send(Event::Shutdown);
        return windows::core::BOOL(1);
    }
    windows::core::BOOL(0)
}
