//! Per-tick rules applied by the [`Simulation`](crate::simulation::Simulation).
//!
//! World behaviours transform every patch at once; slime behaviours act on a
//! single slime and are run for each slime in creation order.

mod aggregation;
mod diffusion;
mod evaporation;

pub use aggregation::{Aggregation, FOLLOW_HIGH_PROBABILITY};
pub use diffusion::{Diffusion, DIFFUSION_THRESHOLD};
pub use evaporation::Evaporation;

use crate::slime::SlimeId;
use crate::world::GridWorld;

/// A rule applied once per tick to the whole world.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldBehaviour {
    Diffusion(Diffusion),
    Evaporation(Evaporation),
}

impl WorldBehaviour {
    pub fn apply(&mut self, world: &mut GridWorld) {
        match self {
            WorldBehaviour::Diffusion(diffusion) => diffusion.apply(world),
            WorldBehaviour::Evaporation(evaporation) => evaporation.apply(world),
        }
    }
}

impl From<Diffusion> for WorldBehaviour {
    fn from(diffusion: Diffusion) -> Self {
        WorldBehaviour::Diffusion(diffusion)
    }
}

impl From<Evaporation> for WorldBehaviour {
    fn from(evaporation: Evaporation) -> Self {
        WorldBehaviour::Evaporation(evaporation)
    }
}

/// A rule applied once per tick to each slime.
#[derive(Debug, Clone)]
pub enum SlimeBehaviour {
    Aggregation(Aggregation),
}

impl SlimeBehaviour {
    pub fn apply(&mut self, world: &mut GridWorld, slime: SlimeId) {
        match self {
            SlimeBehaviour::Aggregation(aggregation) => aggregation.apply(world, slime),
        }
    }
}

impl From<Aggregation> for SlimeBehaviour {
    fn from(aggregation: Aggregation) -> Self {
        SlimeBehaviour::Aggregation(aggregation)
    }
}
