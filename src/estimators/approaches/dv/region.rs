// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::dv::partition::Leaf;
use ndarray::{ArrayView2, Axis};

/// Concatenate the `[start, stop)` slices of the leaf bounds in the given order.
pub fn project_bounds(leaf: &Leaf, ranges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
    let mut mins = Vec::new();
    let mut maxs = Vec::new();
    for &(start, stop) in ranges {
        mins.extend_from_slice(&leaf.mins[start..stop]);
        maxs.extend_from_slice(&leaf.maxs[start..stop]);
    }
    (mins, maxs)
}

/// Count rows of `points` inside the leaf box projected onto `ranges`.
///
/// `points` must have exactly as many columns as the ranges select; its rows
/// are aligned one to one with the cloud the leaf was built from. Bounds are
/// inclusive.
pub fn count_in_projected_box(
    points: ArrayView2<'_, usize>,
    leaf: &Leaf,
    ranges: &[(usize, usize)],
) -> usize {
    let (mins, maxs) = project_bounds(leaf, ranges);
    debug_assert_eq!(mins.len(), points.ncols());
    points
        .axis_iter(Axis(0))
        .filter(|row| {
            row.iter()
                .zip(mins.iter().zip(maxs.iter()))
                .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
        })
        .count()
}
