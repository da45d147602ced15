mod loader;
pub mod template;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::Hotkey;
use crate::centraliser::MAX_TITLE_UNITS;
use crate::log::{LogConfig, MAX_FILE_MB};

pub use loader::{config_dir, config_path, load, load_from, try_load_from};

/// Top-level configuration.
///
/// Loaded from `~/.config/centraliser/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The key combination that centres the focused window.
    pub hotkey: Hotkey,
    /// Window title reading.
    pub title: TitleConfig,
    /// File logging.
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Longest title read from a window, in UTF-16 code units (one per
    /// character except emoji and other astral symbols, which take two).
    /// Longer titles are truncated.
    pub max_chars: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_TITLE_UNITS,
        }
    }
}

impl Config {
    /// Clamps values to usable ranges.
    pub fn validate(&mut self) {
        self.title.max_chars = self.title.max_chars.clamp(1, MAX_TITLE_UNITS);
        self.logging.max_file_mb = self.logging.max_file_mb.min(MAX_FILE_MB);

        let key = self.hotkey.key.trim();
        if key.is_empty() {
            self.hotkey.key = Hotkey::default().key;
        } else if key.len() != self.hotkey.key.len() {
            self.hotkey.key = key.to_string();
        }

        let mut seen = Vec::new();
        self.hotkey.modifiers.retain(|m| {
            let first = !seen.contains(m);
            seen.push(*m);
            first
        });
    }
}
