//! Blocking model and channel dimensioning.
//!
//! Evaluation and search: model
//! Inverse problem (largest load for a pool): capacity

pub mod capacity;
pub mod model;
