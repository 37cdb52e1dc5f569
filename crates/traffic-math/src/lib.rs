//! Numerical kernels for Traffic Dimensioning Core.

pub mod erlang;
pub mod table;
