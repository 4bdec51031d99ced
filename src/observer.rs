use crate::behaviour::DIFFUSION_THRESHOLD;
use crate::world::GridWorld;
use anyhow::Result;
use log::{error, info};
use slime_common::TickStats;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Notified once per tick, after every behaviour has run.
///
/// Observers only get a shared borrow of the world and cannot change it.
pub trait SimulationObserver {
    fn on_world_changes(&mut self, world: &GridWorld);
}

impl<F> SimulationObserver for F
where
    F: FnMut(&GridWorld),
{
    fn on_world_changes(&mut self, world: &GridWorld) {
        self(world)
    }
}

/// Computes the pheromone and occupancy metrics of `world`.
pub fn collect_stats(world: &GridWorld, tick: u64) -> TickStats {
    let patches = world.patches();
    let total_pheromone: f64 = patches.iter().map(|p| p.pheromone()).sum();
    let max_pheromone = patches
        .iter()
        .map(|p| p.pheromone())
        .fold(f64::NEG_INFINITY, f64::max);
    let patches_above_one = patches.iter().filter(|p| p.pheromone() >= DIFFUSION_THRESHOLD).count() as u64;
    let occupied: HashSet<_> = world.slimes().map(|s| world.slime_position(s)).collect();

    TickStats {
        tick,
        total_pheromone,
        mean_pheromone: total_pheromone / patches.len() as f64,
        max_pheromone,
        patches_above_one,
        occupied_patches: occupied.len() as u64,
        slime_count: world.slime_count() as u64,
    }
}

/// Counts ticks, logs a status line every `log_interval` ticks and optionally
/// appends one CSV row per tick.
pub struct StatsRecorder {
    ticks_seen: u64,
    log_interval: u64,
    writer: Option<csv::Writer<File>>,
    last: Option<TickStats>,
}

impl StatsRecorder {
    pub fn new(log_interval: u64) -> Self {
        Self {
            ticks_seen: 0,
            log_interval: log_interval.max(1),
            writer: None,
            last: None,
        }
    }

    /// Like [`StatsRecorder::new`], also writing every tick to a CSV file at `path`.
    pub fn with_csv<P: AsRef<Path>>(log_interval: u64, path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let writer = csv::Writer::from_path(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to create stats file '{}': {}", path_ref.display(), e))?;
        info!("Writing per-tick statistics to {}", path_ref.display());
        Ok(Self {
            writer: Some(writer),
            ..Self::new(log_interval)
        })
    }

    pub fn ticks_seen(&self) -> u64 {
        self.ticks_seen
    }

    pub fn last(&self) -> Option<&TickStats> {
        self.last.as_ref()
    }
}

impl SimulationObserver for StatsRecorder {
    fn on_world_changes(&mut self, world: &GridWorld) {
        self.ticks_seen += 1;
        let stats = collect_stats(world, self.ticks_seen);

        if self.ticks_seen % self.log_interval == 0 {
            info!(
                "Tick {} | Total pheromone: {:.3} | Max: {:.3} | Saturated patches: {} | Occupied patches: {}/{}",
                stats.tick,
                stats.total_pheromone,
                stats.max_pheromone,
                stats.patches_above_one,
                stats.occupied_patches,
                stats.slime_count
            );
        }
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.serialize(&stats).and_then(|_| writer.flush().map_err(csv::Error::from)) {
                error!("Error writing stats for tick {}: {}", stats.tick, e);
            }
        }
        self.last = Some(stats);
    }
}
