use std::io;
use std::path::{Path, PathBuf};

use super::Config;
use crate::{Error, Result};

/// Returns the config directory: `~/.config/centraliser/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("centraliser"))
}

/// Returns the config file path: `~/.config/centraliser/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Reads and parses the config file at `path`, then validates it.
pub fn try_load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    config.validate();
    Ok(config)
}

/// Loads `path`, falling back to defaults.
///
/// A missing file silently yields defaults; any other failure is
/// reported on stderr first.
pub fn load_from(path: &Path) -> Config {
    match try_load_from(path) {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Loads the config from the default location.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}
