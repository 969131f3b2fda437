//! Host settings
//!
//! Knobs for the headless runner. Gameplay constants are not configurable;
//! they live in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Headless runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the random source
    pub seed: u64,
    /// Stop after this many ticks
    pub max_ticks: u64,
    /// Drive input from the built-in pilot instead of staying idle
    pub autopilot: bool,

    // === Output ===
    /// Print a JSON snapshot every N ticks (0 = never)
    pub snapshot_every: u64,
    /// Print an ASCII frame every N ticks (0 = never)
    pub ascii_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 12345,
            max_ticks: 60 * 60,
            autopilot: true,

            snapshot_every: 0,
            ascii_every: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
