// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Capacity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Capacity of a fixed pool: the largest offered load it carries within
//! a target blocking.
//!
//! Blocking is non-decreasing in load, so the answer is bracketed by
//! doubling and then narrowed by bisection on the load axis.

use crate::model::BlockingModel;
use tracing::debug;
use traffic_math::erlang::erlang_b;

impl BlockingModel {
    /// Largest load with `evaluate_blocking(load, channels) <= target`.
    ///
    /// The returned load always satisfies the target. Targets at or above 1
    /// admit any load and return `f64::INFINITY`; zero channels or a
    /// non-positive target admit none and return 0.
    pub fn max_offered_load(&self, channels: usize, target: f64) -> f64 {
        if !(target > 0.0) || channels == 0 {
            return 0.0;
        }
        if target >= 1.0 {
            return f64::INFINITY;
        }

        let mut lo = 0.0;
        let mut hi = channels as f64;
        while erlang_b(hi, channels) <= target {
            lo = hi;
            hi *= 2.0;
        }

        let tol = self.config().capacity_tolerance;
        let mut iters = 0;
        while iters < self.config().max_bisection_iters && hi - lo > tol * hi {
            let mid = 0.5 * (lo + hi);
            if erlang_b(mid, channels) <= target {
                lo = mid;
            } else {
                hi = mid;
            }
            iters += 1;
        }

        debug!(channels, target, load = lo, iters, "capacity bisection finished");
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traffic_types::config::DimensioningConfig;

    #[test]
    fn test_single_channel_half_blocking() {
        // B(A, 1) = A / (1 + A) <= 0.5  ⇔  A <= 1
        let a = BlockingModel::default().max_offered_load(1, 0.5);
        assert!((a - 1.0).abs() < 1e-8, "capacity = {a}");
    }

    #[test]
    fn test_reference_capacities() {
        let m = BlockingModel::default();
        let cases: &[(usize, f64, f64)] = &[
            (10, 0.02, 5.084004630455149),
            (30, 0.01, 20.337285728095317),
        ];
        for &(c, target, expected) in cases {
            let a = m.max_offered_load(c, target);
            assert!(
                (a - expected).abs() < 1e-6,
                "capacity({c}, {target}) = {a}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_capacity_meets_target() {
        let m = BlockingModel::default();
        for c in [1, 5, 24, 120] {
            let a = m.max_offered_load(c, 0.01);
            assert!(m.evaluate_blocking(a, c) <= 0.01);
            assert!(m.evaluate_blocking(a * (1.0 + 1e-6), c) > 0.01);
        }
    }

    #[test]
    fn test_degenerate_targets_and_pools() {
        let m = BlockingModel::default();
        assert_eq!(m.max_offered_load(0, 0.5), 0.0);
        assert_eq!(m.max_offered_load(10, 0.0), 0.0);
        assert_eq!(m.max_offered_load(10, f64::NAN), 0.0);
        assert!(m.max_offered_load(10, 1.0).is_infinite());
    }

    #[test]
    fn test_iteration_budget_is_respected() {
        let m = BlockingModel::new(DimensioningConfig {
            max_bisection_iters: 1,
            ..Default::default()
        })
        .unwrap();
        let a = m.max_offered_load(10, 0.02);
        assert!(m.evaluate_blocking(a, 10) <= 0.02);
    }

    #[test]
    fn test_capacity_round_trips_through_search() {
        let m = BlockingModel::default();
        let a = m.max_offered_load(40, 0.005);
        assert_eq!(m.minimum_channels(a, 0.005), 40);
    }
}
