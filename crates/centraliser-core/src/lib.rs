pub mod centraliser;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hotkey;
pub mod log;
pub mod rect;
pub mod window;

#[cfg(test)]
pub(crate) mod fake;

pub use centraliser::{Centraliser, Phase, WindowTitle};
pub use dispatch::{DispatchStats, Event};
pub use error::{Error, Result};
pub use hotkey::{CENTRE_HOTKEY_ID, Hotkey, HotkeyRegistrar, Modifier, Registration};
pub use rect::Rect;
pub use window::{Placement, WindowHandle, WindowSystem};
