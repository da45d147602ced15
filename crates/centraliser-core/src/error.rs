use thiserror::Error;

use crate::Rect;

/// Errors raised by window queries, window moves and hotkey registration.
///
/// Every platform call surfaces its failure through one of these variants
/// so the caller can decide whether to retry or tell the user.
#[derive(Debug, Error)]
pub enum Error {
    /// A handle or geometry query reported failure.
    #[error("failed to query {query}: {reason}")]
    QueryFailed { query: &'static str, reason: String },

    /// The platform returned a rectangle with `right < left` or `bottom < top`.
    #[error("platform reported inverted bounds {rect:?}")]
    InvalidBounds { rect: Rect },

    /// The hotkey could not be registered (e.g. another process owns it).
    #[error("failed to register hotkey {hotkey}: {reason}")]
    RegistrationFailed { hotkey: String, reason: String },

    /// The reposition request was rejected.
    #[error("failed to move window: {reason}")]
    MoveFailed { reason: String },

    /// A configured key name has no platform key code.
    #[error("unknown key name {0:?}")]
    UnknownKey(String),

    #[error("config: {0}")]
    Config(String),

    #[error("event loop: {0}")]
    EventLoop(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn query_failed(query: &'static str, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            query,
            reason: reason.into(),
        }
    }
}
