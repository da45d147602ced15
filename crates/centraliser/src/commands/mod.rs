pub mod centre;
pub mod info;
pub mod init;
pub mod run;

use std::path::Path;
use std::time::Duration;

use clap::Args;

use centraliser_core::config::{self, Config};

/// Arguments shared by the one-shot commands.
#[derive(Args)]
pub struct WaitArgs {
    /// Seconds to wait before reading the focused window, so another
    /// window can be focused first
    #[arg(long, default_value_t = 0)]
    delay: u64,
}

#[cfg_attr(not(windows), allow(dead_code))]
impl WaitArgs {
    pub fn wait(&self) {
        if self.delay > 0 {
            println!("Reading the focused window in {}s...", self.delay);
            std::thread::sleep(Duration::from_secs(self.delay));
        }
    }
}

/// Loads the config from `path` or the default location and starts logging.
pub fn load_config(path: Option<&Path>) -> Config {
    let config = match path {
        Some(p) => config::load_from(p),
        None => config::load(),
    };
    centraliser_core::log::init(&config.logging);
    config
}

/// Reports that a command needs the Win32 desktop and exits.
#[cfg(not(windows))]
pub fn unsupported(command: &str) -> ! {
    eprintln!("Error: `centraliser {command}` requires a Windows desktop session.");
    std::process::exit(1);
}
