// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Blocking Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! BlockingModel — Erlang B evaluation and minimum-channel search.
//!
//! The search walks the Erlang B recursion one channel at a time, so each
//! candidate costs O(1) on top of the previous one. It stops at the first
//! channel count whose blocking is at or below the target, or at the
//! configured channel cap.

use std::path::Path;
use tracing::{debug, warn};
use traffic_math::erlang::{erlang_b, ErlangRecursion};
use traffic_types::config::DimensioningConfig;
use traffic_types::error::{TrafficError, TrafficResult};
use traffic_types::state::{Dimensioning, SearchStatus};

/// Reject loads outside [0, ∞).
pub fn validate_load(load: f64) -> TrafficResult<f64> {
    if !load.is_finite() || load < 0.0 {
        return Err(TrafficError::InvalidLoad(load));
    }
    Ok(load)
}

/// Reject targets outside (0, 1].
pub fn validate_target(target: f64) -> TrafficResult<f64> {
    if !target.is_finite() || target <= 0.0 || target > 1.0 {
        return Err(TrafficError::InvalidTarget(target));
    }
    Ok(target)
}

/// Loss-system model of a pool of identical channels with no waiting room.
///
/// Holds only the search limits; every traffic input is a call argument.
#[derive(Debug, Clone, Default)]
pub struct BlockingModel {
    config: DimensioningConfig,
}

impl BlockingModel {
    pub fn new(config: DimensioningConfig) -> TrafficResult<Self> {
        config.validate()?;
        Ok(BlockingModel { config })
    }

    /// Load limits from a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> TrafficResult<Self> {
        let config = DimensioningConfig::from_file(path)?;
        Ok(BlockingModel { config })
    }

    pub fn config(&self) -> &DimensioningConfig {
        &self.config
    }

    pub fn max_channels(&self) -> usize {
        self.config.max_channels
    }

    /// Reject pool sizes above the configured channel cap.
    ///
    /// Evaluation is linear in the channel count, so callers taking pool
    /// sizes from user input bound them here first.
    pub fn check_channels(&self, channels: usize) -> TrafficResult<usize> {
        if channels > self.config.max_channels {
            return Err(TrafficError::ChannelLimit {
                channels,
                limit: self.config.max_channels,
            });
        }
        Ok(channels)
    }

    /// Probability that a demand finds all `channels` busy.
    ///
    /// Always in [0, 1]. Zero channels block with probability 1 for every
    /// load. Negative or NaN loads are treated as no traffic.
    pub fn evaluate_blocking(&self, load: f64, channels: usize) -> f64 {
        erlang_b(load, channels)
    }

    /// [`Self::evaluate_blocking`] with the load checked first.
    pub fn try_evaluate_blocking(&self, load: f64, channels: usize) -> TrafficResult<f64> {
        let load = validate_load(load)?;
        Ok(erlang_b(load, channels))
    }

    /// Smallest channel count with blocking at or below `target`.
    ///
    /// Returns 0 without searching when `load <= 0` or `target <= 0`. That
    /// sentinel is indistinguishable from a real answer, so callers that
    /// need to tell them apart should use [`Self::dimension`] and check
    /// `status`. When the target is unreachable within the channel cap the
    /// cap itself is returned, which is a fallback and not a valid
    /// dimensioning.
    pub fn minimum_channels(&self, load: f64, target: f64) -> usize {
        self.dimension(load, target).channels
    }

    /// Full search result, with the status flag and derived traffic.
    pub fn dimension(&self, load: f64, target: f64) -> Dimensioning {
        // Written as negations so NaN also lands here.
        if !(load > 0.0) || !(target > 0.0) {
            debug!(load, target, "no search: non-positive load or target");
            return Dimensioning::new(load, target, 0, erlang_b(load, 0), SearchStatus::NotSearched);
        }

        let cap = self.config.max_channels;
        let mut last = (0, 1.0);

        for (channels, blocking) in ErlangRecursion::new(load).skip(1).take(cap) {
            if blocking <= target {
                debug!(load, target, channels, blocking, "minimum channel count found");
                return Dimensioning::new(load, target, channels, blocking, SearchStatus::Satisfied);
            }
            last = (channels, blocking);
        }

        let (channels, blocking) = last;
        warn!(
            load,
            target,
            cap,
            blocking,
            "channel cap reached before target blocking; returning cap"
        );
        Dimensioning::new(load, target, channels, blocking, SearchStatus::CapReached)
    }

    /// [`Self::dimension`] with load and target checked first.
    ///
    /// A zero load is valid input and yields a `NotSearched` result.
    pub fn try_dimension(&self, load: f64, target: f64) -> TrafficResult<Dimensioning> {
        let load = validate_load(load)?;
        let target = validate_target(target)?;
        Ok(self.dimension(load, target))
    }
}
