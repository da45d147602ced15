mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "centraliser",
    version,
    about = "Centre the focused window with a global hotkey"
)]
struct Cli {
    /// Config file to use instead of ~/.config/centraliser/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Register the hotkey and centre the focused window on every press (default)
    Run,
    /// Centre the focused window once
    Centre(commands::WaitArgs),
    /// Print the focused window's title, size and position
    Info(commands::WaitArgs),
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Init => commands::init::execute(config),
        Commands::Run => commands::run::execute(config),
        Commands::Centre(args) => commands::centre::execute(config, &args),
        Commands::Info(args) => commands::info::execute(config, &args),
    }
}
