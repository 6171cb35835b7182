use std::path::PathBuf;
use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod carousel;
mod constants;
mod engine;
mod error;
mod layout;
mod menu;
mod showcase;
mod state;
mod texture_loader;
mod timer;

use crate::constants::*;
use crate::engine::Engine;
use crate::showcase::engine::ShowcaseEngine;
use crate::texture_loader::{load_sorted_image_paths, shuffle_paths};

/// Auto-advancing image carousel with arrows, indicator dots and a slide menu
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
struct Args {
    /// Directory containing the slide images
    image_directory: PathBuf,

    /// Time between automatic advances, in milliseconds
    #[arg(long, env = "CAROUSEL_INTERVAL_MS", default_value_t = AUTO_ADVANCE_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Show the slides in random order
    #[arg(long, env = "CAROUSEL_SHUFFLE")]
    shuffle: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "carousel=debug" } else { "carousel=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("Error loading images from {:?}", args.image_directory))?;
    if args.shuffle {
        shuffle_paths(&mut image_paths);
    }
    info!(dir = ?args.image_directory, images = image_paths.len(), "Starting carousel");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the menu; Q quits
    rl.set_exit_key(Some(KeyboardKey::KEY_Q));

    let mut engine = ShowcaseEngine::initialize(&mut rl, &thread, image_paths)?
        .with_interval(Duration::from_millis(args.interval_ms));

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        engine.update(dt, &mut rl);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    Ok(())
}
