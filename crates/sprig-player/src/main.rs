//! Sprig Player - runs the demo game in a window
//!
//! Usage:
//!   sprig-player [--config <sprig.toml>] [--fullscreen] [--fps <rate>]
//!                [--width <px> --height <px>] [--content <dir>]

use anyhow::{Context, Result};
use clap::Parser;
use sprig_player::{DemoGame, WinitBackend};
use sprig_runtime::{GameConfig, GameHost};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sprig-player")]
#[command(about = "Sprig player - run the demo game in a window")]
struct Args {
    /// Path to the game configuration file
    #[arg(long, default_value = "sprig.toml")]
    config: PathBuf,

    /// Start in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Target ticks per second
    #[arg(long)]
    fps: Option<f64>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Content directory
    #[arg(long)]
    content: Option<String>,

    /// Require the accelerated rendering path
    #[arg(long)]
    accelerated: bool,
}

impl Args {
    fn apply(&self, config: &mut GameConfig) {
        if self.fullscreen {
            config.fullscreen = true;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(content) = &self.content {
            config.content_directory = content.clone();
        }
        if self.accelerated {
            config.require_accelerated = true;
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = GameConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    args.apply(&mut config);

    let backend = WinitBackend::new().context("Failed to create event loop")?;
    let mut host = GameHost::with_config(DemoGame::new(), backend, config)
        .context("Invalid configuration")?;

    println!("Controls:");
    println!("  Up/Down  - Move selection");
    println!("  Enter    - Select");
    println!("  Space    - Particle burst (play screen)");
    println!("  Escape   - Back to menu");
    println!("  F1       - Toggle frame counter");
    println!("  F11      - Toggle fullscreen");

    let code = host.run();
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
