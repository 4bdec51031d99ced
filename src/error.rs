use thiserror::Error;

/// Errors raised while building a world or its patches.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    /// Dimensions, slime count or seed that cannot describe a world.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A patch was constructed with pheromone outside `[0.0, 1.0]`.
    #[error("pheromone must be between 0.0 and 1.0, got {0}")]
    PheromoneOutOfRange(f64),
}
