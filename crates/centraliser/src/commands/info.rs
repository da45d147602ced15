use std::path::Path;

use super::WaitArgs;

#[cfg(windows)]
pub fn execute(path: Option<&Path>, args: &WaitArgs) {
    use centraliser_core::Result;

    let config = super::load_config(path);
    args.wait();

    let report = || -> Result<()> {
        let mut centraliser = centraliser_windows::daemon::attach(&config)?;
        let focused = centraliser.refresh_focused()?;
        let title = centraliser.window_title()?;
        let (x, y) = centraliser.window_position();

        println!("Window:         {focused}");
        if title.truncated {
            println!("Window Title:   {} (truncated)", title.text);
        } else {
            println!("Window Title:   {}", title.text);
        }
        println!("Window Width:   {}", centraliser.window_width());
        println!("Window Height:  {}", centraliser.window_height());
        println!("Desktop Width:  {}", centraliser.screen_width());
        println!("Desktop Height: {}", centraliser.screen_height());
        println!("Window X:       {x}");
        println!("Window Y:       {y}");
        Ok(())
    };

    if let Err(e) = report() {
        eprintln!("Failed to inspect window: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
pub fn execute(path: Option<&Path>, args: &WaitArgs) {
    let _ = super::load_config(path);
    let _ = args;
    super::unsupported("info");
}
