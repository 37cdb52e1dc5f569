// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Property-Based Tests (proptest) for traffic-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for traffic-math using proptest.
//!
//! Covers: Erlang B range and monotonicity, recursion vs closed form,
//! incremental recursion, blocking tables.

use proptest::prelude::*;
use traffic_math::erlang::{erlang_b, erlang_b_direct, ErlangRecursion};
use traffic_math::table::blocking_table;

// ── Erlang B Range ───────────────────────────────────────────────────

proptest! {
    /// Blocking is a probability for any load and channel count.
    #[test]
    fn blocking_in_unit_interval(load in 0.0f64..1e4, channels in 0usize..3_000) {
        let b = erlang_b(load, channels);
        prop_assert!((0.0..=1.0).contains(&b), "B({}, {}) = {}", load, channels, b);
    }

    /// No channels means certain blocking.
    #[test]
    fn zero_channels_is_one(load in 0.0f64..1e6) {
        prop_assert_eq!(erlang_b(load, 0), 1.0);
    }

    /// Recursion stays finite far past the factorial overflow point.
    #[test]
    fn large_channel_counts_finite(load in 100.0f64..5_000.0, channels in 171usize..6_000) {
        let b = erlang_b(load, channels);
        prop_assert!(b.is_finite(), "B({}, {}) not finite", load, channels);
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────

proptest! {
    /// Adding a channel never increases blocking.
    #[test]
    fn non_increasing_in_channels(load in 1e-3f64..500.0, channels in 0usize..1_000) {
        let b0 = erlang_b(load, channels);
        let b1 = erlang_b(load, channels + 1);
        prop_assert!(b1 <= b0, "B({}, {}) = {} > B({}, {}) = {}",
            load, channels + 1, b1, load, channels, b0);
    }

    /// More offered load never decreases blocking.
    #[test]
    fn non_decreasing_in_load(
        load in 0.0f64..500.0,
        extra in 0.0f64..100.0,
        channels in 1usize..600,
    ) {
        let lo = erlang_b(load, channels);
        let hi = erlang_b(load + extra, channels);
        prop_assert!(lo <= hi, "B({}, {}) = {} > B({}, {}) = {}",
            load, channels, lo, load + extra, channels, hi);
    }
}

// ── Recursion vs Closed Form ─────────────────────────────────────────

proptest! {
    /// Stable recursion agrees with the ratio of sums where the latter is
    /// well-conditioned.
    #[test]
    fn recursion_matches_closed_form(load in 0.0f64..=20.0, channels in 0usize..=20) {
        let stable = erlang_b(load, channels);
        let direct = erlang_b_direct(load, channels);
        if direct == 0.0 {
            prop_assert_eq!(stable, 0.0);
        } else {
            let rel = (stable - direct).abs() / direct;
            prop_assert!(rel < 1e-9,
                "B({}, {}): recursion {} vs closed form {} (rel {})",
                load, channels, stable, direct, rel);
        }
    }

    /// The iterator reproduces the one-shot kernel term by term.
    #[test]
    fn iterator_matches_kernel(load in 0.0f64..200.0, n in 1usize..300) {
        for (k, b) in ErlangRecursion::new(load).take(n) {
            prop_assert_eq!(b, erlang_b(load, k));
        }
    }
}

// ── Blocking Table ───────────────────────────────────────────────────

proptest! {
    /// Every table row is non-increasing across channel counts.
    #[test]
    fn table_rows_non_increasing(
        loads in prop::collection::vec(1e-3f64..100.0, 1..8),
        max_channels in 1usize..150,
    ) {
        let t = blocking_table(&loads, max_channels).unwrap();
        prop_assert_eq!(t.shape(), &[loads.len(), max_channels + 1]);
        for i in 0..loads.len() {
            for c in 1..=max_channels {
                prop_assert!(t[[i, c]] <= t[[i, c - 1]]);
            }
        }
    }
}
