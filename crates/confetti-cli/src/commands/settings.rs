//! Settings file commands

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use confetti_core::Settings;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Write a settings file with the default values
    Init {
        /// Settings file (defaults to the per-user config location)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective settings
    Show {
        /// Settings file (defaults to the per-user config location)
        path: Option<PathBuf>,

        /// Output format (text, toml or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check that a settings file parses
    Check {
        /// Settings file
        path: PathBuf,
    },
}

pub fn run(cmd: SettingsCommands) -> Result<()> {
    match cmd {
        SettingsCommands::Init { path, force } => init(&resolve(path)?, force),
        SettingsCommands::Show { path, format } => show(&resolve(path)?, &format),
        SettingsCommands::Check { path } => check(&path),
    }
}

fn resolve(path: Option<PathBuf>) -> Result<PathBuf> {
    match path.or_else(Settings::default_path) {
        Some(path) => Ok(path),
        None => bail!("No config directory on this platform; pass a settings path"),
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

fn show(path: &Path, format: &str) -> Result<()> {
    let settings = Settings::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    print!("{}", render(&settings, format)?);
    Ok(())
}

fn render(settings: &Settings, format: &str) -> Result<String> {
    match format {
        "text" => Ok(format!(
            "enabled:         {}\n\
             particleCount:   {}\n\
             explosionPower:  {}\n\
             particleSize:    {}\n\
             gravity:         {}\n\
             fade:            {}\n\
             fadeSpeed:       {}\n",
            settings.enabled,
            settings.particle_count,
            settings.explosion_power,
            settings.particle_size,
            settings.gravity,
            settings.fade,
            settings.fade_speed,
        )),
        "toml" => Ok(settings.to_toml_string()?),
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(settings)?)),
        other => bail!("Unknown format '{}'; valid values: text, toml, json", other),
    }
}

fn check(path: &Path) -> Result<()> {
    let settings =
        Settings::load(path).with_context(|| format!("Invalid settings file {}", path.display()))?;
    println!("{} is valid", path.display());
    if !settings.enabled {
        println!("  note: confetti is disabled");
    }
    if settings.particle_count == 0 {
        println!("  note: particleCount is 0, bursts will be empty");
    }
    Ok(())
}
