use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::path::Path;

// Grid dimensions and initial slime placement
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub num_slimes: usize,
    /// Placement seed. When absent a random positive seed is drawn at creation.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 100,
            height: 100,
            num_slimes: 500,
            seed: Some(42),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DiffusionConfig {
    pub rate: f64,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        DiffusionConfig { rate: 1.0 / 16.0 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvaporationConfig {
    pub rate: f64,
}

impl Default for EvaporationConfig {
    fn default() -> Self {
        EvaporationConfig { rate: 0.6 }
    }
}

// Parameters for the slime aggregation policy
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AggregationConfig {
    pub seed: u64,
    pub threshold: f64,
    pub pheromone_dropped: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        AggregationConfig {
            seed: 42,
            threshold: 20.0,
            pheromone_dropped: 1.0,
        }
    }
}

// Driver pacing. The engine itself never sleeps or stops on its own.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Number of ticks to run. `None` runs until the process is killed.
    pub steps: Option<u64>,
    pub tick_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            steps: None,
            tick_delay_ms: 16,
        }
    }
}

// Configuration for output settings
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub log_interval_ticks: u64,
    pub stats_csv: Option<String>, // Per-tick statistics, one CSV row per tick
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            log_interval_ticks: 100,
            stats_csv: None,
        }
    }
}

// Main simulation configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SimulationConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub diffusion: DiffusionConfig,
    #[serde(default)]
    pub evaporation: EvaporationConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Loads the simulation configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        Self::from_toml_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Invalid config '{}': {}", path_ref.display(), e))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the engine or driver cannot run with.
    pub fn validate(&self) -> Result<()> {
        let world = &self.world;
        if world.width == 0 || world.height == 0 {
            anyhow::bail!("world width and height must be positive.");
        }
        if world.num_slimes == 0 {
            anyhow::bail!("num_slimes must be greater than 0.");
        }
        let capacity = world.width.checked_mul(world.height)
            .ok_or_else(|| anyhow::anyhow!("world of {}x{} patches is too large.", world.width, world.height))?;
        if world.num_slimes > capacity {
            anyhow::bail!("num_slimes ({}) exceeds the {} patches of the world.", world.num_slimes, capacity);
        }
        if world.seed == Some(0) {
            anyhow::bail!("world seed must be positive.");
        }
        if self.aggregation.seed == 0 {
            anyhow::bail!("aggregation seed must be positive.");
        }
        if !self.diffusion.rate.is_finite() || !self.evaporation.rate.is_finite() {
            anyhow::bail!("diffusion and evaporation rates must be finite.");
        }
        if !self.aggregation.threshold.is_finite() || !self.aggregation.pheromone_dropped.is_finite() {
            anyhow::bail!("aggregation threshold and pheromone_dropped must be finite.");
        }
        if self.output.log_interval_ticks == 0 {
            anyhow::bail!("log_interval_ticks must be greater than 0.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_matches_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.world.width, 100);
        assert_eq!(config.world.num_slimes, 500);
        assert_eq!(config.diffusion.rate, 0.0625);
        assert_eq!(config.timing.steps, None);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [world]
            width = 20
            height = 10
            num_slimes = 5

            [timing]
            steps = 50
            tick_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 20);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.world.seed, Some(42));
        assert_eq!(config.timing.steps, Some(50));
        assert_eq!(config.evaporation.rate, 0.6);
        assert_eq!(config.aggregation.threshold, 20.0);
    }

    #[test]
    fn rejects_more_slimes_than_patches() {
        let err = SimulationConfig::from_toml_str(
            "[world]\nwidth = 2\nheight = 2\nnum_slimes = 5\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn rejects_zero_values() {
        assert!(SimulationConfig::from_toml_str("[world]\nwidth = 0\n").is_err());
        assert!(SimulationConfig::from_toml_str("[world]\nnum_slimes = 0\n").is_err());
        assert!(SimulationConfig::from_toml_str("[world]\nseed = 0\n").is_err());
        assert!(SimulationConfig::from_toml_str("[aggregation]\nseed = 0\n").is_err());
        assert!(SimulationConfig::from_toml_str("[output]\nlog_interval_ticks = 0\n").is_err());
    }

    #[test]
    fn rejects_negative_dimensions_at_parse_time() {
        assert!(SimulationConfig::from_toml_str("[world]\nwidth = -3\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("slime-common-missing-config.toml");
        let _ = std::fs::remove_file(&path);
        let err = SimulationConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("slime-common-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[diffusion]\nrate = 0.25\n").unwrap();
        let config = SimulationConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.diffusion.rate, 0.25);
    }
}
