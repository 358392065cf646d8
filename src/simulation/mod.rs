pub mod engine;

pub use engine::{RunStats, SimulationEngine};
