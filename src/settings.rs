//! Host settings
//!
//! Simulation options plus demo-driver preferences, persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::SimConfig;

/// Headless demo options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Frames to run before giving up; each frame is one tick
    pub max_frames: u32,
    /// Autopilot acts once every this many frames
    pub command_interval: u32,
    /// Autopilot look-ahead in ticks
    pub autopilot_horizon: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            max_frames: 60 * 60,
            command_interval: 6,
            autopilot_horizon: 12,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sim: SimConfig,
    /// Lane seed; a random one is picked when absent
    pub seed: Option<u64>,
    pub demo: DemoSettings,
}

impl Settings {
    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        if self.demo.command_interval == 0 {
            return Err(ConfigError::Invalid(
                "demo.command_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
