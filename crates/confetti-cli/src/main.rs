//! Confetti CLI - run the overlay, render scenarios headlessly, manage settings

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{play, render, settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confetti")]
#[command(about = "Confetti bursts on every click and keystroke", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the transparent confetti overlay
    Play {
        /// Path to settings file
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Launch in fullscreen mode
        #[arg(long)]
        fullscreen: bool,

        /// Reload settings when the file changes
        #[arg(long)]
        watch: bool,
    },

    /// Render a scenario to PNG frames and/or a GIF (headless)
    Render {
        /// Path to scenario file
        scenario: PathBuf,

        /// Directory for PNG frames
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write an animated GIF
        #[arg(long)]
        gif: Option<PathBuf>,

        /// Keep every Nth frame
        #[arg(long, default_value = "1")]
        every: u32,
    },

    /// Settings file operations
    #[command(subcommand)]
    Settings(settings::SettingsCommands),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            settings,
            fullscreen,
            watch,
        } => play::run(play::PlayArgs {
            settings,
            fullscreen,
            watch,
        }),
        Commands::Render {
            scenario,
            output,
            gif,
            every,
        } => render::run(render::RenderArgs {
            scenario,
            output,
            gif,
            every,
        }),
        Commands::Settings(cmd) => settings::run(cmd),
    }
}
