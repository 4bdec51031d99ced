use serde::{Serialize, Deserialize};

/// Aggregate pheromone and slime metrics for the world after one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)] // Serialize doubles as the CSV row layout
pub struct TickStats {
    /// Number of ticks applied when these stats were taken (1 after the first update).
    pub tick: u64,
    /// Sum of pheromone over every patch.
    pub total_pheromone: f64,
    /// `total_pheromone` divided by the number of patches.
    pub mean_pheromone: f64,
    /// Highest pheromone level on any patch.
    pub max_pheromone: f64,
    /// Patches at or above 1.0, i.e. the ones diffusion will broadcast from next tick.
    pub patches_above_one: u64,
    /// Distinct positions currently holding at least one slime.
    pub occupied_patches: u64,
    pub slime_count: u64,
}
