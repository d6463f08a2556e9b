use std::path::PathBuf;

use clap::Parser;

use custom_lock::config::Config;
use custom_lock::logging::init_tracing;
use custom_lock::ui;

/// Full-screen lock screen for Hyprland.
#[derive(Debug, Parser)]
#[command(name = "custom-lock", version, about)]
struct Args {
    /// Draw the lock screen in the current terminal instead of as a Wayland overlay
    #[arg(long)]
    console: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);
    tracing::info!(console = args.console, "custom-lock starting");

    if args.console {
        ui::console::run(&config)?;
    } else {
        ui::overlay::run(&config)?;
    }

    tracing::info!("unlocked");
    Ok(())
}
