// Headless maze runner: generates levels and drives a random-walking pilot
// through them, printing each maze and periodic stats.
// Run with RUST_LOG=debug (or trace) to see collisions, marks and bounces.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use maze_core::engine::{MarkOutcome, agent_model};
use maze_core::{Facing, MazeConfig, MazeError, Session};

#[derive(Parser, Debug)]
#[command(name = "maze-core", about = "Generate mazes and simulate agents moving through them")]
struct Args {
    /// JSON config file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows of the first level (overrides the config)
    #[arg(long)]
    rows: Option<usize>,

    /// Columns of the first level (overrides the config)
    #[arg(long)]
    cols: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulation ticks to run
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Stop after this many levels have been escaped
    #[arg(long, default_value_t = 3)]
    levels: u32,

    /// Toggle the facing mark every N ticks (0 disables marking)
    #[arg(long, default_value_t = 500)]
    mark_every: u64,
}

// ============================================================================
// PILOT
// ============================================================================

/// Random walker: keeps a cardinal heading until blocked, then picks another.
struct Pilot {
    facing: Facing,
    rng: StdRng,
}

impl Pilot {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ 0x5EED),
            None => StdRng::from_entropy(),
        };
        Self {
            facing: Facing::North,
            rng,
        }
    }

    fn heading(&self) -> Vec3 {
        match self.facing {
            Facing::North => Vec3::NEG_Z,
            Facing::South => Vec3::Z,
            Facing::East => Vec3::X,
            Facing::West => Vec3::NEG_X,
        }
    }

    fn turn(&mut self) {
        const ALL: [Facing; 4] = [Facing::North, Facing::South, Facing::East, Facing::West];
        self.facing = ALL[self.rng.gen_range(0..ALL.len())];
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn load_config(args: &Args) -> Result<MazeConfig, MazeError> {
    let mut config = match &args.config {
        Some(path) => MazeConfig::from_path(path)?,
        None => MazeConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.initial_rows = rows;
    }
    if let Some(cols) = args.cols {
        config.initial_cols = cols;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), MazeError> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    let mut session = Session::new(config)?;
    let mut pilot = Pilot::new(args.seed);
    let mut blocked = 0u64;
    let mut bounces = 0usize;
    let mut escaped = 0u32;

    println!("Level {}:\n{}", session.level().number(), session.level().maze());

    for tick in 1..=args.ticks {
        let report = session.tick(Some(pilot.heading()));
        bounces += report.bounced;
        if report.moved == Some(false) {
            blocked += 1;
            pilot.turn();
        }

        if args.mark_every > 0 && tick % args.mark_every == 0 {
            match session.toggle_facing_mark(pilot.facing) {
                MarkOutcome::Accepted => info!("tick {tick}: toggled mark facing {:?}", pilot.facing),
                outcome => warn!("tick {tick}: mark facing {:?} refused ({outcome:?})", pilot.facing),
            }
        }

        if report.escaped {
            escaped += 1;
            info!("tick {tick}: escaped level {}", session.level().number());
            if escaped >= args.levels {
                break;
            }
            session.advance_level()?;
            println!("Level {}:\n{}", session.level().number(), session.level().maze());
        }

        if tick % 1000 == 0 {
            let poses = session.agent_poses();
            let lead = poses
                .first()
                .map(|p| agent_model(p.previous, p.position, 1.0).w_axis.truncate());
            println!(
                "Tick {tick} | Level {} | Navigator cell {:?} | Blocked {blocked} | Wanderer bounces {bounces} | Lead wanderer {lead:?}",
                session.level().number(),
                session.level().navigator().cell(),
            );
        }
    }

    println!(
        "Done: {escaped} level(s) escaped, {} wall instances, {} marks on the current level",
        session.wall_instances().len(),
        session.mark_instances().len(),
    );
    Ok(())
}
