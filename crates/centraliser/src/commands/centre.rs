use std::path::Path;

use super::WaitArgs;

#[cfg(windows)]
pub fn execute(path: Option<&Path>, args: &WaitArgs) {
    let config = super::load_config(path);
    args.wait();

    let result = centraliser_windows::daemon::attach(&config).and_then(|mut centraliser| {
        let placement = centraliser.handle_trigger()?;
        Ok((centraliser.state().focused, placement))
    });

    match result {
        Ok((focused, p)) => println!(
            "Centred window {focused} at ({}, {}) {}x{}",
            p.x,
            p.y,
            p.width,
            p.height
        ),
        Err(e) => {
            eprintln!("Failed to centre window: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute(path: Option<&Path>, args: &WaitArgs) {
    let _ = super::load_config(path);
    let _ = args;
    super::unsupported("centre");
}
