// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrafficError {
    #[error("Offered load must be finite and >= 0, got {0}")]
    InvalidLoad(f64),

    #[error("Target blocking must be finite and in (0, 1], got {0}")]
    InvalidTarget(f64),

    #[error("Channel count {channels} exceeds limit {limit}")]
    ChannelLimit { channels: usize, limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
