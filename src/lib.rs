//! # Ant Forage
//!
//! A small ant colony foraging simulation.
//!
//! Ants wander, follow the single pheromone the player drops, pick up food
//! from inexhaustible sources and carry it home. Every delivery hatches a
//! new ant at the nest. The library holds the engine; rendering and input
//! devices stay outside and talk to it through events and snapshots.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod config;
pub mod error;
pub mod pheromone;
pub mod point;
pub mod simulation;

pub use ant::{Ant, ForagingState};
pub use cli::Args;
pub use colony::{Colony, Event, Snapshot};
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use pheromone::Pheromone;
pub use point::Point;
pub use simulation::SimulationEngine;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Colony, Event, ForagingState, Pheromone, Point, Result, SimConfig, SimError,
        SimulationEngine, Snapshot,
    };
}
