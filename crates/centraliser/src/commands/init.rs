use std::path::Path;

use centraliser_core::config;

/// Writes the commented default config, never overwriting an existing file.
pub fn execute(path: Option<&Path>) {
    let Some(path) = path.map(Path::to_path_buf).or_else(config::config_path) else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    if let Some(dir) = path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    match std::fs::write(&path, config::template::generate_config()) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
