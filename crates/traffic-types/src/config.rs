// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_CAPACITY_TOLERANCE, DEFAULT_MAX_BISECTION_ITERS, DEFAULT_MAX_CHANNELS,
};
use crate::error::{TrafficError, TrafficResult};

/// Search and inversion limits for a blocking model.
/// Every field is optional in JSON; missing fields take the reference defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensioningConfig {
    /// Channel count at which the minimum-channel search gives up (default: 10000)
    #[serde(default = "default_max_channels")]
    pub max_channels: usize,
    /// Relative load bracket width ending capacity bisection (default: 1e-9)
    #[serde(default = "default_capacity_tolerance")]
    pub capacity_tolerance: f64,
    /// Bisection step budget for capacity inversion (default: 200)
    #[serde(default = "default_max_bisection_iters")]
    pub max_bisection_iters: usize,
}

fn default_max_channels() -> usize {
    DEFAULT_MAX_CHANNELS
}
fn default_capacity_tolerance() -> f64 {
    DEFAULT_CAPACITY_TOLERANCE
}
fn default_max_bisection_iters() -> usize {
    DEFAULT_MAX_BISECTION_ITERS
}

impl Default for DimensioningConfig {
    fn default() -> Self {
        DimensioningConfig {
            max_channels: default_max_channels(),
            capacity_tolerance: default_capacity_tolerance(),
            max_bisection_iters: default_max_bisection_iters(),
        }
    }
}

impl DimensioningConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> TrafficResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TrafficResult<()> {
        if self.max_channels == 0 {
            return Err(TrafficError::ConfigError(
                "max_channels must be >= 1".to_string(),
            ));
        }
        if !self.capacity_tolerance.is_finite() || self.capacity_tolerance <= 0.0 {
            return Err(TrafficError::ConfigError(format!(
                "capacity_tolerance must be finite and > 0, got {}",
                self.capacity_tolerance
            )));
        }
        if self.max_bisection_iters == 0 {
            return Err(TrafficError::ConfigError(
                "max_bisection_iters must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
