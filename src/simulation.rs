use crate::behaviour::{Aggregation, Diffusion, Evaporation, SlimeBehaviour, WorldBehaviour};
use crate::error::WorldError;
use crate::observer::SimulationObserver;
use crate::slime::SlimeId;
use crate::world::GridWorld;
use log::trace;
use slime_common::SimulationConfig;

/// Runs the behaviour pipeline over a world, one tick per [`Simulation::update`].
///
/// There is no tick counter and no stopping condition; the caller decides how
/// often and how long to call `update`.
pub struct Simulation {
    world: GridWorld,
    world_behaviours: Vec<WorldBehaviour>,
    slime_behaviours: Vec<SlimeBehaviour>,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl Simulation {
    pub fn new(
        world: GridWorld,
        world_behaviours: Vec<WorldBehaviour>,
        slime_behaviours: Vec<SlimeBehaviour>,
        observers: Vec<Box<dyn SimulationObserver>>,
    ) -> Self {
        Self { world, world_behaviours, slime_behaviours, observers }
    }

    /// Builds the world and the diffusion, evaporation and aggregation
    /// pipeline described by `config`, after validating it.
    pub fn from_config(
        config: &SimulationConfig,
        observers: Vec<Box<dyn SimulationObserver>>,
    ) -> Result<Self, WorldError> {
        config
            .validate()
            .map_err(|e| WorldError::InvalidConfiguration(e.to_string()))?;
        let world = GridWorld::create(
            config.world.width,
            config.world.height,
            config.world.num_slimes,
            config.world.seed,
        )?;
        let world_behaviours: Vec<WorldBehaviour> = vec![
            Diffusion::new(config.diffusion.rate).into(),
            Evaporation::new(config.evaporation.rate).into(),
        ];
        let slime_behaviours: Vec<SlimeBehaviour> = vec![Aggregation::new(
            config.aggregation.seed,
            config.aggregation.threshold,
            config.aggregation.pheromone_dropped,
        )
        .into()];
        Ok(Self::new(world, world_behaviours, slime_behaviours, observers))
    }

    /// Applies one tick: every world behaviour over the whole world in list
    /// order, then every slime behaviour for each slime in creation order,
    /// then notifies observers in registration order.
    pub fn update(&mut self) {
        for behaviour in &mut self.world_behaviours {
            behaviour.apply(&mut self.world);
        }

        let slimes: Vec<SlimeId> = self.world.slimes().collect();
        for slime in slimes {
            for behaviour in &mut self.slime_behaviours {
                behaviour.apply(&mut self.world, slime);
            }
        }

        for observer in &mut self.observers {
            observer.on_world_changes(&self.world);
        }
        trace!("Tick applied to {} slimes, {} observers notified.", self.world.slime_count(), self.observers.len());
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn world_behaviours(&self) -> &[WorldBehaviour] {
        &self.world_behaviours
    }

    pub fn slime_behaviours(&self) -> &[SlimeBehaviour] {
        &self.slime_behaviours
    }

    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }
}
