//! Configuration loading for DishaNav

use marga_map::TrackerConfig;
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct DishaConfig {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// Floor-plan document settings
#[derive(Clone, Debug, Deserialize)]
pub struct PlanConfig {
    /// Path to the floor-plan JSON document (default: stitched.json)
    #[serde(default = "default_plan_path")]
    pub path: String,

    /// Floor identifier to load (default: Floor_0)
    #[serde(default = "default_floor")]
    pub floor: String,
}

fn default_plan_path() -> String {
    "stitched.json".to_string()
}

fn default_floor() -> String {
    "Floor_0".to_string()
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            path: default_plan_path(),
            floor: default_floor(),
        }
    }
}

impl Default for DishaConfig {
    fn default() -> Self {
        Self {
            plan: PlanConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl DishaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<DishaConfig> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
