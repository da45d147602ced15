use std::sync::mpsc;

use centraliser_core::config::Config;
use centraliser_core::{CENTRE_HOTKEY_ID, Centraliser, DispatchStats, Result, dispatch};

use crate::{Win32WindowSystem, ctrl_c, dpi, event_loop};

/// Attaches to the desktop with per-monitor DPI awareness enabled.
pub fn attach(config: &Config) -> Result<Centraliser<Win32WindowSystem>> {
    dpi::enable_dpi_awareness();
    Centraliser::attach(Win32WindowSystem, config.title.max_chars)
}

/// Runs the centraliser in the foreground until Ctrl+C.
///
/// The desktop geometry is captured once up front. The hotkey lives on the
/// event loop thread; the centering state stays on this thread.
pub fn run(config: &Config) -> Result<DispatchStats> {
    let mut centraliser = attach(config)?;

    let (tx, rx) = mpsc::channel();
    ctrl_c::set_handler(tx.clone())?;
    let event_loop = event_loop::start(tx, config.hotkey.clone())?;

    centraliser_core::log_info!("centraliser started, hotkey {}", config.hotkey);
    eprintln!(
        "Centraliser running. Press {} to centre the focused window, Ctrl+C to quit.",
        config.hotkey
    );

    let stats = dispatch::run(&mut centraliser, CENTRE_HOTKEY_ID, &rx, |e| {
        eprintln!("Centering failed: {e}");
    });

    event_loop.stop();
    centraliser_core::log_info!(
        "centraliser stopped: {} centred, {} failed",
        stats.centred,
        stats.failed
    );

    Ok(stats)
}
