// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Stable argsort for f64 values.
///
/// Ties are resolved by original index order, matching
/// `numpy.argsort(kind="stable")`. NaNs sort after every finite value.
pub fn argsort(values: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = values[i];
        let b = values[j];
        match a.partial_cmp(&b) {
            Some(core::cmp::Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Less
                }
            }
        }
    });
}

/// Ordinal rank transform.
///
/// Every sample receives its 1-based position in the sorted signal. Equal
/// values get distinct ranks in order of appearance, so the output is always
/// a permutation of `1..=n`.
pub fn rank_transform(values: &[f64]) -> Array1<usize> {
    let n = values.len();
    let mut idx = vec![0usize; n];
    argsort(values, &mut idx);

    let mut ranks = Array1::zeros(n);
    for (position, &original) in idx.iter().enumerate() {
        ranks[original] = position + 1;
    }
    ranks
}

/// Rank transform of a view, used for non-contiguous matrix columns.
pub fn rank_view(values: ArrayView1<'_, f64>) -> Array1<usize> {
    match values.as_slice() {
        Some(slice) => rank_transform(slice),
        None => rank_transform(&values.to_vec()),
    }
}

/// Rank every column of a matrix independently.
pub fn rank_columns(data: &Array2<f64>) -> Array2<usize> {
    let mut ranked = Array2::zeros(data.raw_dim());
    for (src, mut dst) in data.axis_iter(Axis(1)).zip(ranked.axis_iter_mut(Axis(1))) {
        dst.assign(&rank_view(src));
    }
    ranked
}
