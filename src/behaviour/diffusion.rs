use crate::world::GridWorld;

/// Patches below this level do not diffuse.
pub const DIFFUSION_THRESHOLD: f64 = 1.0;

/// Broadcasts a share of each saturated patch to its neighbours.
///
/// The source keeps its own level, so the total amount of pheromone grows.
/// Patches are visited x-major and read live: a neighbour pushed to the
/// threshold earlier in the same pass diffuses when its turn comes.
#[derive(Debug, Clone, PartialEq)]
pub struct Diffusion {
    diffusion_rate: f64,
}

impl Diffusion {
    pub fn new(diffusion_rate: f64) -> Self {
        Self { diffusion_rate }
    }

    pub fn diffusion_rate(&self) -> f64 {
        self.diffusion_rate
    }

    pub fn apply(&self, world: &mut GridWorld) {
        for idx in 0..world.patches().len() {
            let patch = &world.patches()[idx];
            if patch.pheromone() < DIFFUSION_THRESHOLD {
                continue;
            }
            let diffused = patch.pheromone() * self.diffusion_rate;
            for neighbor in world.neighbor_positions(patch.position()) {
                world.patch_mut(neighbor).add_pheromone(diffused);
            }
        }
    }
}
