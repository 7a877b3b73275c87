//! Headless scenario render command - PNG frames and/or an animated GIF

use anyhow::{bail, Context, Result};
use confetti_runtime::Scenario;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// GIF frames are flattened onto this color
const GIF_BACKGROUND: [u8; 3] = [255, 255, 255];

pub struct RenderArgs {
    pub scenario: PathBuf,
    pub output: Option<PathBuf>,
    pub gif: Option<PathBuf>,
    pub every: u32,
}

pub fn run(args: RenderArgs) -> Result<()> {
    if args.every == 0 {
        bail!("--every must be at least 1");
    }
    let delay_numer = args
        .every
        .checked_mul(1000)
        .with_context(|| format!("--every {} is too large", args.every))?;

    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("Failed to load scenario {}", args.scenario.display()))?;
    println!(
        "Loaded scenario: {}x{} @ {} fps, {} frames, {} triggers",
        scenario.width,
        scenario.height,
        scenario.fps,
        scenario.frames,
        scenario.triggers.len()
    );

    // PNG frames go to ./frames unless only a GIF was asked for
    let output_dir = match (&args.output, &args.gif) {
        (Some(dir), _) => Some(dir.clone()),
        (None, None) => Some(PathBuf::from("frames")),
        (None, Some(_)) => None,
    };
    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut gif = match &args.gif {
        Some(path) => Some(open_gif(path)?),
        None => None,
    };
    let delay = Delay::from_numer_denom_ms(delay_numer, scenario.fps);

    let mut player = scenario.player();
    let mut written = 0;
    let mut peak_particles = 0;
    while player.step().is_some() {
        peak_particles = peak_particles.max(player.controller().particle_count());

        let Some(frame) = player.frame() else {
            continue;
        };
        if frame % args.every != 0 {
            continue;
        }

        if let Some(dir) = &output_dir {
            let path = dir.join(format!("frame_{:04}.png", frame));
            player
                .surface()
                .save_png(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written += 1;
        }

        if let Some(encoder) = gif.as_mut() {
            let image = player.surface().flatten(GIF_BACKGROUND);
            encoder
                .encode_frame(Frame::from_parts(image, 0, 0, delay))
                .context("Failed to encode GIF frame")?;
        }
    }

    if let Some(dir) = &output_dir {
        println!("Wrote {} frames to {}", written, dir.display());
    }
    if let Some(path) = &args.gif {
        // Dropping the encoder writes the trailer
        drop(gif);
        println!("Wrote {}", path.display());
    }
    println!(
        "Peak particles: {}, still alive at end: {}",
        peak_particles,
        player.controller().particle_count()
    );

    Ok(())
}

fn open_gif(path: &Path) -> Result<GifEncoder<BufWriter<File>>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .context("Failed to configure GIF")?;
    Ok(encoder)
}
