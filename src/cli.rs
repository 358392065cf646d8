use crate::config::SimConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the foraging simulation
#[derive(Parser, Debug)]
#[command(name = "ant_forage", about = "🐜 Headless ant colony foraging simulator")]
pub struct Args {
    /// Number of ticks to simulate
    #[arg(short = 't', long, default_value_t = 1_000)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ants at the starting nest
    #[arg(short = 'n', long = "ants", default_value_t = 3)]
    pub ants: usize,

    /// Arena width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Arena height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Distance an ant covers per tick when heading somewhere
    #[arg(long, default_value_t = 2.0)]
    pub speed: f64,

    /// Food pickup radius
    #[arg(long, default_value_t = 20.0)]
    pub food_radius: f64,

    /// Nest arrival radius
    #[arg(long, default_value_t = 10.0)]
    pub nest_radius: f64,

    /// Event script: one `<tick> <command> [args]` per line
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Write JSON snapshots, one per line, to this file
    #[arg(long)]
    pub snapshots: Option<PathBuf>,

    /// Ticks between snapshots
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub snapshot_every: u64,

    /// Pause between ticks in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Suppress colony event logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Build and validate the simulation constants
    pub fn config(&self) -> Result<SimConfig> {
        let config = SimConfig {
            ant_speed: self.speed,
            food_radius: self.food_radius,
            nest_radius: self.nest_radius,
            initial_ants: self.ants,
            width: self.width,
            height: self.height,
            ..SimConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}
