use thiserror::Error;

/// Error types for the foraging simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid line in an event script
    #[error("Invalid line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// Unknown key or malformed raw input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// External event that cannot be applied to the colony
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    /// Simulation constants out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Snapshot serialization failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
