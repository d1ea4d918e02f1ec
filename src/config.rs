//! Simulation settings, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "cell_size": 2.0, "spawn_radius": 6, "seed": 42 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Side of one cell in pixels.
    pub cell_size: f32,
    /// Velocity gained per tick of free fall, in cells.
    pub gravity: f32,
    pub spawn_radius: u32,
    /// Candidate points sampled per spawn call.
    pub spawn_amount: u32,
    pub frame_rate: u32,
    /// Hue in degrees of the first spawned particle.
    pub start_hue: f32,
    pub background: [u8; 3],
    /// Fixed seed for the grid's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            cell_size: 4.0,
            gravity: 1.0,
            spawn_radius: 10,
            spawn_amount: 20,
            frame_rate: 60,
            start_hue: 220.0,
            background: [0, 0, 0],
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "cell_size": 2.0, "seed": 42 }"#).unwrap();
        assert_eq!(config.cell_size, 2.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.spawn_amount, 20);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = std::env::temp_dir().join("sand_grid_malformed_config.json");
        fs::write(&path, "{ cell_size: ").unwrap();
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SimulationConfig::load("/definitely/not/here/sand.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let path = std::env::temp_dir().join("sand_grid_saved_config.json");
        let config = SimulationConfig {
            gravity: 0.5,
            background: [96, 96, 96],
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = SimulationConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn zero_frame_rate_is_clamped() {
        let config = SimulationConfig {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_secs(1));
    }
}
