//! Headless runner: spawns a geometry hub and steps the world for a fixed
//! number of virtual frames.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use geometry_hub::{init_logging, GeometryActor, GeometryRng, HubConfig, HubPlugin, HubStats};
use log::info;

/// Spawn geometry actors from a hub and watch them change colour
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON hub description; the default hub is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Virtual duration of each frame in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Seed for colour and movement choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => HubConfig::load(path)
            .with_context(|| format!("loading hub config from {}", path.display()))?,
        None => HubConfig::default(),
    };

    let step = Duration::from_millis(args.frame_ms);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    if let Some(seed) = args.seed {
        app.insert_resource(GeometryRng::seeded(seed));
    }
    app.add_plugins(HubPlugin)
        .insert_resource(config)
        .insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(step.max(Duration::from_millis(250)));
    app.finish();
    app.cleanup();

    for _ in 0..args.frames {
        app.update();
    }

    let world = app.world_mut();
    let alive = world.query::<&GeometryActor>().iter(world).count();
    let elapsed = world.resource::<Time>().elapsed_secs();
    info!("Simulated {} frames ({elapsed:.2}s): {alive} geometry actors alive", args.frames);
    for stats in world.query::<&HubStats>().iter(world) {
        info!(
            "Hub observed {} colour changes and destroyed {} actors",
            stats.color_changes, stats.destroyed
        );
    }
    Ok(())
}
