//! Slime-mold aggregation on a toroidal grid.
//!
//! Patches hold a pheromone level that diffuses and evaporates each tick,
//! while slimes wander towards rich patches and drop more pheromone.

pub mod behaviour;
pub mod error;
pub mod observer;
pub mod patch;
pub mod position;
pub mod simulation;
pub mod slime;
pub mod world;

pub use behaviour::{Aggregation, Diffusion, Evaporation, SlimeBehaviour, WorldBehaviour};
pub use error::WorldError;
pub use observer::{collect_stats, SimulationObserver, StatsRecorder};
pub use patch::Patch;
pub use position::Position;
pub use simulation::Simulation;
pub use slime::SlimeId;
pub use world::GridWorld;
