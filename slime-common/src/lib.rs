pub mod config;
pub mod stats;

// Re-export key types for easier use by dependent crates
pub use config::{
    AggregationConfig, DiffusionConfig, EvaporationConfig, OutputConfig, SimulationConfig,
    TimingConfig, WorldConfig,
};
pub use stats::TickStats;
