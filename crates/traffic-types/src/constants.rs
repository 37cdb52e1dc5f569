// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Upper bound on the channel search. Reached only for unreachable targets.
pub const DEFAULT_MAX_CHANNELS: usize = 10_000;

/// Blocking returned when the loss-formula denominator collapses to zero.
/// Unreachable for non-negative loads (the k = 0 term is always 1).
pub const ZERO_DENOMINATOR_BLOCKING: f64 = 1.0;

/// Largest n for which n! is representable as a finite f64.
pub const MAX_FACTORIAL_F64: usize = 170;

/// Relative bracket width at which capacity bisection stops.
pub const DEFAULT_CAPACITY_TOLERANCE: f64 = 1e-9;

/// Bisection iteration budget for capacity inversion.
pub const DEFAULT_MAX_BISECTION_ITERS: usize = 200;
