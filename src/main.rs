use anyhow::Result;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use log::{info, warn, debug, trace};

use slime_common::SimulationConfig;
use slime_engine::{Simulation, SimulationObserver, StatsRecorder};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    info!("Starting Slime Engine...");

    // --- Load Configuration ---
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = if Path::new(&config_path).exists() {
        SimulationConfig::load(&config_path)?
    } else {
        warn!("Config file '{}' not found, using built-in defaults.", config_path);
        SimulationConfig::default()
    };
    debug!("Simulation configuration: {:#?}", config);

    // --- Initialize Simulation ---
    let recorder = match &config.output.stats_csv {
        Some(path) => StatsRecorder::with_csv(config.output.log_interval_ticks, path)?,
        None => StatsRecorder::new(config.output.log_interval_ticks),
    };
    let observers: Vec<Box<dyn SimulationObserver>> = vec![Box::new(recorder)];
    let mut sim = Simulation::from_config(&config, observers)?;
    info!(
        "World initialized: {}x{} patches, {} slimes.",
        sim.world().width(),
        sim.world().height(),
        sim.world().slime_count()
    );

    // --- Simulation Loop ---
    let tick_delay = Duration::from_millis(config.timing.tick_delay_ms);
    match config.timing.steps {
        Some(steps) => info!("Running {} ticks ({} ms between ticks)...", steps, config.timing.tick_delay_ms),
        None => info!("Running until interrupted ({} ms between ticks)...", config.timing.tick_delay_ms),
    }
    let start_time = Instant::now();
    let mut tick: u64 = 0;

    while config.timing.steps.map_or(true, |steps| tick < steps) {
        let step_start_time = Instant::now();
        sim.update();
        tick += 1;
        trace!(
            "Tick {} completed in {:.2} ms",
            tick,
            step_start_time.elapsed().as_secs_f64() * 1000.0
        );

        if !tick_delay.is_zero() {
            thread::sleep(tick_delay);
        }
    }

    let total_duration = start_time.elapsed();
    info!(
        "Simulation finished {} ticks in {:.3} seconds.",
        tick,
        total_duration.as_secs_f64()
    );
    Ok(())
}
