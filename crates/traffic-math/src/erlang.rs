// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Erlang B
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Erlang B loss formula.
//!
//! The blocking probability of a pool of `c` channels offered `A` Erlangs
//! with no waiting room is
//!
//!   B(A, c) = (A^c / c!) / Σ_{k=0..c} (A^k / k!)
//!
//! Evaluated with the recursion B(0) = 1, B(k) = A·B(k−1) / (k + A·B(k−1)),
//! which never forms a factorial or a large power and stays in [0, 1]
//! for channel counts in the tens of thousands.

use traffic_types::constants::{MAX_FACTORIAL_F64, ZERO_DENOMINATOR_BLOCKING};

/// Map a raw load onto the kernel domain.
/// Negative and NaN loads are treated as no traffic; +∞ saturates to f64::MAX.
#[inline]
fn clamp_load(load: f64) -> f64 {
    if load > 0.0 {
        load.min(f64::MAX)
    } else {
        0.0
    }
}

/// One step of the recursion: B(k) from B(k−1).
#[inline]
pub fn erlang_step(load: f64, k: usize, prev: f64) -> f64 {
    let offered = load * prev;
    let den = k as f64 + offered;
    if den == 0.0 {
        return ZERO_DENOMINATOR_BLOCKING;
    }
    offered / den
}

/// Blocking probability for `load` Erlangs offered to `channels` channels.
///
/// `erlang_b(load, 0)` is 1 for every load, including 0.
/// Returns as soon as blocking underflows to 0, since every later term is 0.
pub fn erlang_b(load: f64, channels: usize) -> f64 {
    let load = clamp_load(load);
    let mut blocking = 1.0;
    for k in 1..=channels {
        blocking = erlang_step(load, k, blocking);
        if blocking == 0.0 {
            break;
        }
    }
    blocking
}

/// n! as f64. Overflows to +∞ above 170.
pub fn factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// Closed-form ratio of sums, kept as a reference for the recursion.
///
/// Only well-conditioned for `channels <= 170` and moderate loads;
/// beyond that the power and factorial terms overflow.
pub fn erlang_b_direct(load: f64, channels: usize) -> f64 {
    debug_assert!(
        channels <= MAX_FACTORIAL_F64,
        "erlang_b_direct requires channels <= {MAX_FACTORIAL_F64}, got {channels}"
    );

    let load = clamp_load(load);
    let term = |k: usize| load.powi(k as i32) / factorial(k);

    let numerator = term(channels);
    let denominator: f64 = (0..=channels).map(term).sum();
    if denominator == 0.0 {
        return ZERO_DENOMINATOR_BLOCKING;
    }
    numerator / denominator
}

/// Erlang B over successive channel counts for a fixed load.
///
/// Yields `(k, B(load, k))` for k = 0, 1, 2, … with O(1) work per item,
/// so a search over channel counts never recomputes earlier terms.
#[derive(Debug, Clone)]
pub struct ErlangRecursion {
    load: f64,
    next_k: usize,
    blocking: f64,
}

impl ErlangRecursion {
    pub fn new(load: f64) -> Self {
        ErlangRecursion {
            load: clamp_load(load),
            next_k: 0,
            blocking: 1.0,
        }
    }

    pub fn load(&self) -> f64 {
        self.load
    }
}

impl Iterator for ErlangRecursion {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.next_k;
        if k > 0 {
            self.blocking = erlang_step(self.load, k, self.blocking);
        }
        self.next_k = k.checked_add(1)?;
        Some((k, self.blocking))
    }
}
