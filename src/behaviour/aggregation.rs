use crate::patch::Patch;
use crate::position::Position;
use crate::slime::SlimeId;
use crate::world::GridWorld;
use log::trace;
use rand::prelude::*;

/// Chance that a slime on a rich patch climbs towards the richest neighbour.
pub const FOLLOW_HIGH_PROBABILITY: f64 = 0.5;

/// Moves a slime towards pheromone when it sits on a rich patch, otherwise to a
/// random neighbour, then drops pheromone on the patch it moved to.
///
/// One RNG serves every slime and every tick, so a run is reproducible only
/// while slimes are visited in the same order.
#[derive(Debug, Clone)]
pub struct Aggregation {
    seed: u64,
    threshold: f64,
    pheromone_dropped: f64,
    rng: StdRng,
}

impl Aggregation {
    pub fn new(seed: u64, threshold: f64, pheromone_dropped: f64) -> Self {
        Self {
            seed,
            threshold,
            pheromone_dropped,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn pheromone_dropped(&self) -> f64 {
        self.pheromone_dropped
    }

    pub fn apply(&mut self, world: &mut GridWorld, slime: SlimeId) {
        let position = world.slime_position(slime);
        let patch = world.patch(position);
        let mut neighborhood = world.neighborhood(patch);
        // Drawn on every call so RNG consumption does not depend on the patch level.
        let follow_high = self.rng.random::<f64>() < FOLLOW_HIGH_PROBABILITY;

        let destination = if patch.pheromone() >= self.threshold && follow_high {
            richest(&neighborhood)
        } else {
            neighborhood.shuffle(&mut self.rng);
            neighborhood.first().map(|p| p.position())
        };
        // Only a 1x1 grid has no neighbours; the slime stays put there.
        let destination = destination.unwrap_or(position);

        trace!("Slime {} moves {} -> {} (follow_high: {}).", slime.index(), position, destination, follow_high);
        world.move_slime(slime, destination);
        world.patch_mut(destination).add_pheromone(self.pheromone_dropped);
    }
}

/// First patch holding the highest level, in enumeration order.
fn richest(patches: &[&Patch]) -> Option<Position> {
    let mut best: Option<&Patch> = None;
    for &patch in patches {
        match best {
            Some(current) if patch.pheromone() <= current.pheromone() => {}
            _ => best = Some(patch),
        }
    }
    best.map(|p| p.position())
}
