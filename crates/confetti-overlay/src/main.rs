//! Confetti Overlay - standalone overlay binary
//!
//! Usage:
//!   confetti-overlay [--settings <path>] [--fullscreen] [--watch]

use anyhow::Result;
use clap::Parser;
use confetti_overlay::OverlayOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confetti-overlay")]
#[command(about = "Transparent overlay that bursts confetti on clicks and keystrokes")]
struct Args {
    /// Path to settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Reload settings when the file changes
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    confetti_overlay::run(OverlayOptions {
        settings_path: args.settings,
        fullscreen: args.fullscreen,
        watch: args.watch,
    })
}
