//! Tavern Hotkeys CLI entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use tavern_hotkeys::app::App;

#[derive(Parser)]
#[command(name = "tavern-hotkeys", version, about = "Hotkey-driven tavern automation")]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let mut app = App::new(args.config)?;
    app.run();

    println!("Cleanup complete");
    Ok(())
}
