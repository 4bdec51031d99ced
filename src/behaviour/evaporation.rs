use crate::world::GridWorld;

/// Scales every patch's pheromone by a constant factor each tick.
///
/// There is no threshold; a rate above 1.0 makes the field grow.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaporation {
    evaporation_rate: f64,
}

impl Evaporation {
    pub fn new(evaporation_rate: f64) -> Self {
        Self { evaporation_rate }
    }

    pub fn evaporation_rate(&self) -> f64 {
        self.evaporation_rate
    }

    pub fn apply(&self, world: &mut GridWorld) {
        for idx in 0..world.patches().len() {
            let position = world.patches()[idx].position();
            let patch = world.patch_mut(position);
            patch.set_pheromone(patch.pheromone() * self.evaporation_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn halves_every_patch() {
        let mut world = GridWorld::create(4, 3, 2, Some(11)).unwrap();
        for idx in 0..world.patches().len() {
            let position = world.patches()[idx].position();
            world.patch_mut(position).set_pheromone(1.0);
        }

        Evaporation::new(0.5).apply(&mut world);

        assert!(world.patches().iter().all(|p| p.pheromone() == 0.5));
    }

    #[test]
    fn applies_to_low_levels_and_can_grow() {
        let mut world = GridWorld::create(3, 3, 1, Some(2)).unwrap();
        world.patch_mut(Position::new(1, 2)).set_pheromone(0.2);

        Evaporation::new(3.0).apply(&mut world);

        assert!((world.patch(Position::new(1, 2)).pheromone() - 0.6).abs() < 1e-12);
        assert_eq!(world.patch(Position::new(0, 0)).pheromone(), 0.0);
    }
}
