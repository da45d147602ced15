//! Consumes hotkey events and runs one centering pass per activation.

use std::sync::mpsc::Receiver;

use crate::{Centraliser, Error, WindowSystem};

/// Inbound events delivered to the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A registered hotkey was pressed.
    Hotkey { id: i32 },
    /// Stop dispatching (Ctrl+C or shutdown request).
    Shutdown,
}

/// Counters collected over one dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub centred: usize,
    pub failed: usize,
    pub ignored: usize,
}

/// Runs until `Event::Shutdown` arrives or every sender is dropped.
///
/// Each `Hotkey` event tagged with `hotkey_id` triggers one centering
/// pass. Failures are logged, counted and handed to `on_failure`, but
/// never end the loop.
pub fn run<S: WindowSystem>(
    centraliser: &mut Centraliser<S>,
    hotkey_id: i32,
    events: &Receiver<Event>,
    mut on_failure: impl FnMut(&Error),
) -> DispatchStats {
    let mut stats = DispatchStats::default();

    while let Ok(event) = events.recv() {
        match event {
            Event::Shutdown => break,
            Event::Hotkey { id } if id != hotkey_id => {
                crate::log_debug!("ignoring hotkey id {id}");
                stats.ignored += 1;
            }
            Event::Hotkey { .. } => match centraliser.handle_trigger() {
                Ok(p) => {
                    crate::log_info!(
                        "centred {} at ({}, {}) {}x{}",
                        centraliser.state().focused,
                        p.x,
                        p.y,
                        p.width,
                        p.height
                    );
                    stats.centred += 1;
                }
                Err(e) => {
                    crate::log_warn!("centering failed: {e}");
                    on_failure(&e);
                    stats.failed += 1;
                }
            },
        }
    }

    stats
}
