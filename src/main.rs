/*
 * Headless Flock Simulation Driver
 *
 * Spawns a flock at random positions and steps the engine for a fixed number
 * of frames. All simulation parameters come from the command line; aggregate
 * statistics are emitted by the engine as tracing events.
 */

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use flock::{Boid, FlockEngine, SimulationParams};

/// Headless boid flocking simulation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of boids to spawn
    #[clap(long, default_value = "200")]
    num_boids: usize,

    /// Interaction radius for alignment and cohesion (d)
    #[clap(long, default_value = "50.0")]
    interaction_radius: f32,

    /// Separation radius (d_s); must not exceed the interaction radius
    #[clap(long, default_value = "25.0")]
    separation_radius: f32,

    /// Separation gain (s)
    #[clap(long, default_value = "0.1")]
    separation: f32,

    /// Alignment gain (a)
    #[clap(long, default_value = "0.1")]
    alignment: f32,

    /// Cohesion gain (c)
    #[clap(long, default_value = "0.01")]
    cohesion: f32,

    /// Number of frames to simulate
    #[clap(long, default_value = "600")]
    frames: u64,

    /// Simulated seconds per frame
    #[clap(long, default_value = "0.016")]
    dt: f32,

    /// RNG seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let params = SimulationParams {
        interaction_radius: args.interaction_radius,
        separation_radius: args.separation_radius,
        separation: args.separation,
        alignment: args.alignment,
        cohesion: args.cohesion,
        ..SimulationParams::default()
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let boids: Vec<Boid> = (0..args.num_boids)
        .map(|_| Boid::random(&mut rng, &params))
        .collect();

    let mut engine = FlockEngine::new(boids, params)?;
    info!(
        num_boids = args.num_boids,
        frames = args.frames,
        dt = args.dt,
        "starting simulation"
    );

    for frame in 0..args.frames {
        engine.update(frame, args.dt);
    }

    info!("simulation finished");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
