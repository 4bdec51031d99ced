use crate::error::WorldError;
use crate::position::Position;

/// A fixed grid cell carrying a pheromone level.
///
/// The `[0.0, 1.0]` range is checked only by [`Patch::new`]; later updates
/// through [`Patch::set_pheromone`] are stored as given and may leave it.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    position: Position,
    pheromone: f64,
}

impl Patch {
    pub fn new(position: Position, pheromone: f64) -> Result<Self, WorldError> {
        if !(0.0..=1.0).contains(&pheromone) {
            return Err(WorldError::PheromoneOutOfRange(pheromone));
        }
        Ok(Self { position, pheromone })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    pub fn set_pheromone(&mut self, pheromone: f64) {
        self.pheromone = pheromone;
    }

    /// Adds `amount` to the current level without clamping.
    pub fn add_pheromone(&mut self, amount: f64) {
        self.pheromone += amount;
    }
}
