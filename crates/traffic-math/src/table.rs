// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — Blocking Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Erlang B tables: blocking for a set of loads across 0..=max channels.

use crate::erlang::ErlangRecursion;
use ndarray::Array2;
use traffic_types::error::{TrafficError, TrafficResult};

/// Largest element count an `Array2<f64>` can address.
const MAX_TABLE_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Blocking table of shape `[loads.len(), max_channels + 1]`.
///
/// Entry `[i, c]` is B(loads\[i\], c). Each row is a single pass of the
/// recursion. Fails with `ChannelLimit` when the shape cannot be allocated.
pub fn blocking_table(loads: &[f64], max_channels: usize) -> TrafficResult<Array2<f64>> {
    let columns = max_channels
        .checked_add(1)
        .filter(|&n| loads.len().checked_mul(n).is_some_and(|t| t <= MAX_TABLE_ELEMENTS))
        .ok_or(TrafficError::ChannelLimit {
            channels: max_channels,
            limit: MAX_TABLE_ELEMENTS / loads.len().max(1) - 1,
        })?;

    let mut table = Array2::zeros((loads.len(), columns));

    for (i, &load) in loads.iter().enumerate() {
        for (c, blocking) in ErlangRecursion::new(load).take(columns) {
            table[[i, c]] = blocking;
        }
    }

    Ok(table)
}
