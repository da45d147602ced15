use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares the process per-monitor DPI aware (V2).
///
/// Without it `GetWindowRect` and `SetWindowPos` work in coordinates
/// scaled to the primary monitor's DPI, and the computed centre is off on
/// scaled displays. Call once before any window query.
pub fn enable_dpi_awareness() {
    // SAFETY: process-wide setting, fails harmlessly if a manifest
    // already declared awareness.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
