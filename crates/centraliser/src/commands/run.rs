use std::path::Path;

#[cfg(windows)]
pub fn execute(path: Option<&Path>) {
    let config = super::load_config(path);

    match centraliser_windows::daemon::run(&config) {
        Ok(stats) => println!(
            "Stopped. Centred {} window(s), {} failed.",
            stats.centred, stats.failed
        ),
        Err(e) => {
            centraliser_core::log_error!("centraliser failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute(path: Option<&Path>) {
    let _ = super::load_config(path);
    super::unsupported("run");
}
