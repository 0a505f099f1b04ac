//! Runtime Configuration
//!
//! Everything an operator can tune without recompiling: network binds,
//! the optional serial device, timing, and the best-score path. Loaded
//! from a JSON file when one is given, otherwise built from defaults;
//! every field is individually optional in the file.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{FRAME_RATE, HUNGER_LIMIT_SECS};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UDP control socket bind address.
    pub udp_bind: SocketAddr,
    /// Serial device path; `None` disables the serial listener.
    pub serial_device: Option<String>,
    /// Serial line rate.
    pub serial_baud: u32,
    /// Best-score file path.
    pub best_score_path: String,
    /// Seconds without eating before starvation.
    pub hunger_limit: f64,
    /// Scheduler frame rate (Hz).
    pub frame_rate: u32,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            udp_bind: SocketAddr::from(([0, 0, 0, 0], 5005)),
            serial_device: None,
            serial_baud: 115_200,
            best_score_path: "best_score.txt".to_string(),
            hunger_limit: HUNGER_LIMIT_SECS,
            frame_rate: FRAME_RATE,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config: Config = serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.udp_bind, "0.0.0.0:5005".parse().unwrap());
        assert_eq!(config.serial_device, None);
        assert_eq!(config.serial_baud, 115_200);
        assert_eq!(config.best_score_path, "best_score.txt");
        assert_eq!(config.hunger_limit, 20.0);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"udp_bind": "127.0.0.1:9000", "rng_seed": 7}"#).unwrap();
        assert_eq!(config.udp_bind, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.best_score_path, "best_score.txt");
    }

    #[test]
    fn test_load_without_path_is_default() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.udp_bind, Config::default().udp_bind);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.serial_device = Some("/dev/ttyUSB0".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.serial_device.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(back.udp_bind, config.udp_bind);
    }
}
