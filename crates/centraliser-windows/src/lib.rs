//! Win32 implementation of the Centraliser platform capabilities.

#![cfg(windows)]

/// Ctrl+C handling.
pub mod ctrl_c;

/// Foreground loop: hotkey registration plus dispatch.
pub mod daemon;

/// Window queries and moves over `HWND`s.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Message pump thread that owns the hotkey registration.
pub mod event_loop;

/// `RegisterHotKey` / `UnregisterHotKey`.
pub mod hotkey;

/// Key name to virtual key code mapping.
pub mod keys;

pub use desktop::Win32WindowSystem;
pub use hotkey::Win32Hotkeys;
