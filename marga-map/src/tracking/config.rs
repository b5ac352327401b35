//! Progress tracker configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::guidance::DirectionPolicy;

/// Tunables for route progress tracking.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Degrees of tolerance either side of the required bearing for a
    /// heading sample to count as facing the next node (default: 25)
    #[serde(default = "default_heading_tolerance")]
    pub heading_tolerance_deg: f32,

    /// Continuous time a heading must stay within tolerance before the
    /// cursor advances, in milliseconds (default: 2000)
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,

    /// Instruction wording policy
    #[serde(default)]
    pub policy: DirectionPolicy,
}

fn default_heading_tolerance() -> f32 {
    25.0
}

fn default_dwell_ms() -> u64 {
    2000
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            heading_tolerance_deg: default_heading_tolerance(),
            dwell_ms: default_dwell_ms(),
            policy: DirectionPolicy::default(),
        }
    }
}

impl TrackerConfig {
    /// Dwell threshold as a duration
    pub fn dwell_threshold(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.heading_tolerance_deg, 25.0);
        assert_eq!(config.dwell_threshold(), Duration::from_millis(2000));
        assert_eq!(config.policy, DirectionPolicy::AbsoluteOffset);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"dwell_ms": 500}"#).unwrap();
        assert_eq!(config.dwell_ms, 500);
        assert_eq!(config.heading_tolerance_deg, 25.0);
    }
}
