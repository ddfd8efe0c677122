// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Darbellay-Vajda adaptive partitioning
//!
//! The cloud is recursively split into `2^k` children at the integer
//! midpoint of every dimension. A box becomes a leaf as soon as its points are
//! spread uniformly over its children, judged by a chi-squared test with
//! `2^k - 1` degrees of freedom:
//!
//! T = Σ (m - c_i)² / m,  m = n / 2^k
//!
//! or once it cannot be subdivided further. Boxes holding no point are dead
//! branches and never become leaves, so the leaves are disjoint and their
//! counts sum to the number of points in the cloud.
//!
//! Dense child tables would need `2^k` slots per split; counts are kept
//! sparse instead, since empty children only add `m` each to `T`.

use crate::error::{DvError, Result};
use crate::estimators::approaches::dv::params::RootSplit;
use log::{debug, trace};
use ndarray::{ArrayView1, ArrayView2, Axis};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Upper bound on the joint dimensionality accepted by the partitioner.
pub const MAX_JOINT_DIMENSIONS: usize = 32;

/// Terminal box of the partition, with inclusive bounds per dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leaf {
    pub mins: Vec<usize>,
    pub maxs: Vec<usize>,
    /// Number of joint-cloud points inside the box.
    pub n: usize,
}

impl Leaf {
    pub fn dims(&self) -> usize {
        self.mins.len()
    }

    pub fn contains(&self, point: ArrayView1<'_, usize>) -> bool {
        point
            .iter()
            .zip(self.mins.iter().zip(self.maxs.iter()))
            .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// True when the two boxes share at least one lattice point.
    pub fn overlaps(&self, other: &Leaf) -> bool {
        self.mins
            .iter()
            .zip(self.maxs.iter())
            .zip(other.mins.iter().zip(other.maxs.iter()))
            .all(|((&lo_a, &hi_a), (&lo_b, &hi_b))| lo_a <= hi_b && lo_b <= hi_a)
    }
}

/// Componentwise minimum and maximum of the cloud.
///
/// Returns `None` for a cloud without rows.
pub fn bounding_box(cloud: ArrayView2<'_, usize>) -> Option<(Vec<usize>, Vec<usize>)> {
    if cloud.nrows() == 0 {
        return None;
    }
    let mut mins = cloud.row(0).to_vec();
    let mut maxs = mins.clone();
    for row in cloud.axis_iter(Axis(0)) {
        for (j, &v) in row.iter().enumerate() {
            mins[j] = mins[j].min(v);
            maxs[j] = maxs[j].max(v);
        }
    }
    Some((mins, maxs))
}

/// Chi-squared statistic of `n` points spread over `cells` children.
///
/// `occupied` lists the counts of the non-empty children only. Returns `None`
/// when the expected count is zero.
pub fn uniformity_statistic(occupied: &[usize], cells: f64) -> Option<f64> {
    let n: usize = occupied.iter().sum();
    let mean = n as f64 / cells;
    if mean == 0.0 {
        return None;
    }
    let filled: f64 = occupied
        .iter()
        .map(|&c| {
            let diff = mean - c as f64;
            diff * diff / mean
        })
        .sum();
    let empty = cells - occupied.len() as f64;
    Some(filled + empty * mean)
}

/// Critical value of the uniformity test at level `alpha` for `dims` dimensions.
pub fn critical_value(alpha: f64, dims: usize) -> Result<f64> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(DvError::InvalidParameter {
            name: "alpha",
            reason: format!("must lie in (0, 1), got {alpha}"),
        });
    }
    let freedom = 2f64.powi(dims as i32) - 1.0;
    let chi2 = ChiSquared::new(freedom).map_err(|e| DvError::InvalidParameter {
        name: "alpha",
        reason: e.to_string(),
    })?;
    Ok(chi2.inverse_cdf(1.0 - alpha))
}

struct PendingBox {
    mins: Vec<usize>,
    maxs: Vec<usize>,
    members: Vec<usize>,
    is_root: bool,
}

/// Partition `cloud` (rows are points in rank space) into DV leaves.
///
/// Leaves are emitted depth-first, children visited in binary order with the
/// first dimension as the most significant bit.
pub fn partition(
    cloud: ArrayView2<'_, usize>,
    alpha: f64,
    root_split: RootSplit,
) -> Result<Vec<Leaf>> {
    let k = cloud.ncols();
    if k == 0 {
        return Err(DvError::InvalidParameter {
            name: "cloud",
            reason: "must have at least one column".to_string(),
        });
    }
    if k > MAX_JOINT_DIMENSIONS {
        return Err(DvError::DimensionTooLarge {
            dims: k,
            max: MAX_JOINT_DIMENSIONS,
        });
    }
    let critical = critical_value(alpha, k)?;
    let cells = 2f64.powi(k as i32);

    let Some((mins, maxs)) = bounding_box(cloud) else {
        return Ok(Vec::new());
    };

    let mut leaves = Vec::new();
    let mut stack = vec![PendingBox {
        mins,
        maxs,
        members: (0..cloud.nrows()).collect(),
        is_root: true,
    }];

    while let Some(pending) = stack.pop() {
        let n = pending.members.len();
        if n == 0 {
            continue;
        }

        let mids: Vec<usize> = pending
            .mins
            .iter()
            .zip(pending.maxs.iter())
            .map(|(&lo, &hi)| (lo + hi) / 2)
            .collect();

        // (child index, row) pairs, grouped by child after sorting
        let mut tagged: Vec<(u64, usize)> = pending
            .members
            .iter()
            .map(|&row| {
                let point = cloud.row(row);
                let child = mids
                    .iter()
                    .enumerate()
                    .fold(0u64, |acc, (j, &mid)| (acc << 1) | u64::from(point[j] > mid));
                (child, row)
            })
            .collect();
        tagged.sort_unstable();

        let groups: Vec<&[(u64, usize)]> = tagged.chunk_by(|a, b| a.0 == b.0).collect();
        let occupied: Vec<usize> = groups.iter().map(|g| g.len()).collect();

        let Some(statistic) = uniformity_statistic(&occupied, cells) else {
            continue;
        };
        let is_uniform = statistic <= critical;
        let subdivisible = pending.mins != pending.maxs;
        let forced = pending.is_root && root_split == RootSplit::Forced;

        if subdivisible && (forced || !is_uniform) {
            for group in groups.iter().rev() {
                let child = group[0].0;
                let mut child_mins = pending.mins.clone();
                let mut child_maxs = pending.maxs.clone();
                for j in 0..k {
                    if (child >> (k - 1 - j)) & 1 == 0 {
                        child_maxs[j] = mids[j];
                    } else {
                        child_mins[j] = mids[j] + 1;
                    }
                }
                stack.push(PendingBox {
                    mins: child_mins,
                    maxs: child_maxs,
                    members: group.iter().map(|&(_, row)| row).collect(),
                    is_root: false,
                });
            }
        } else {
            trace!(
                "leaf mins={:?} maxs={:?} n={} T={:.3} crit={:.3}",
                pending.mins,
                pending.maxs,
                n,
                statistic,
                critical
            );
            leaves.push(Leaf {
                mins: pending.mins,
                maxs: pending.maxs,
                n,
            });
        }
    }

    debug!(
        "DV partition of {} points in {} dimensions produced {} leaves (alpha={}, root={:?})",
        cloud.nrows(),
        k,
        leaves.len(),
        alpha,
        root_split
    );
    Ok(leaves)
}
