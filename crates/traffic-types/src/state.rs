// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// How a minimum-channel search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Blocking at `channels` is at or below the target.
    Satisfied,
    /// The channel cap was hit first; `channels` is the cap, not an answer.
    CapReached,
    /// Load <= 0 or target <= 0; no search ran and `channels` is the sentinel 0.
    NotSearched,
}

/// Result of dimensioning a pool for an offered load and a target blocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensioning {
    pub load: f64,              // Offered load [Erlang]
    pub target: f64,            // Requested blocking
    pub channels: usize,        // Channel count found (or sentinel / cap, see status)
    pub blocking: f64,          // Blocking achieved at `channels`
    pub status: SearchStatus,
    pub carried_load: f64,      // load·(1 − B) [Erlang]
    pub lost_load: f64,         // load·B [Erlang]
    pub occupancy: f64,         // carried_load / channels, 0 with no channels
}

impl Dimensioning {
    /// Assemble a result and derive the carried/lost traffic figures.
    /// Non-positive and NaN loads carry and lose nothing; +∞ is taken as
    /// f64::MAX, the load the Erlang kernel evaluates in its place.
    pub fn new(
        load: f64,
        target: f64,
        channels: usize,
        blocking: f64,
        status: SearchStatus,
    ) -> Self {
        let offered = if load > 0.0 { load.min(f64::MAX) } else { 0.0 };
        let carried_load = offered * (1.0 - blocking);
        let lost_load = offered * blocking;
        let occupancy = if channels > 0 {
            carried_load / channels as f64
        } else {
            0.0
        };

        Dimensioning {
            load,
            target,
            channels,
            blocking,
            status,
            carried_load,
            lost_load,
            occupancy,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.status == SearchStatus::Satisfied
    }
}
