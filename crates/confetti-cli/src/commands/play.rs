//! Play command - launches the confetti overlay

use anyhow::Result;
use confetti_overlay::OverlayOptions;
use std::path::PathBuf;

pub struct PlayArgs {
    pub settings: Option<PathBuf>,
    pub fullscreen: bool,
    pub watch: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    confetti_overlay::run(OverlayOptions {
        settings_path: args.settings,
        fullscreen: args.fullscreen,
        watch: args.watch,
    })
}
