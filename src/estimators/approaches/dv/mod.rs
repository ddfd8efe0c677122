// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Darbellay-Vajda transfer entropy
//!
//! Rank-space estimator of transfer entropy and its conditional, joint and
//! conditional-joint variants. Signals are delay-embedded and ranked column
//! by column, the joint cloud is partitioned once with the adaptive DV
//! algorithm, and every leaf contributes
//!
//! (n_a / N) (log2(n_a n_b) - log2(n_c n_d))
//!
//! where `n_b`, `n_c`, `n_d` count the points of the marginal clouds inside
//! the leaf box projected onto their coordinates. Results are in bits.
//!
//! A leaf whose counts contain a zero contributes nothing. Marginal clouds
//! are row-aligned projections of the joint cloud, so this only happens for
//! inconsistent layouts; it is logged and never yields NaN.

pub mod layout;
pub mod params;
pub mod partition;
pub mod region;

pub use layout::{Block, CloudLayout, DvMeasure};
pub use params::{DvParams, RootSplit};
pub use partition::{Leaf, MAX_JOINT_DIMENSIONS};

use crate::error::{DvError, Result};
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues, TransferEntropyEstimator};
use crate::estimators::utils::embedding::{embed_future, embed_past, embedded_len};
use log::{debug, error, trace, warn};
use ndarray::{Array1, Array2, ArrayView2, Axis, concatenate};
use region::count_in_projected_box;

/// Marginal cloud together with its coordinates in the joint cloud.
struct Marginal {
    points: Array2<usize>,
    ranges: Vec<(usize, usize)>,
}

impl Marginal {
    fn count(&self, leaf: &Leaf) -> usize {
        count_in_projected_box(self.points.view(), leaf, &self.ranges)
    }
}

/// DV estimator for one of the [`DvMeasure`] variants.
///
/// Embedding and partitioning happen in [`DvTransferEntropy::new`]; the
/// estimate itself is a cheap accumulation over the stored leaves.
pub struct DvTransferEntropy {
    measure: DvMeasure,
    params: DvParams,
    joint: Array2<usize>,
    b: Marginal,
    c: Marginal,
    d: Marginal,
    leaves: Vec<Leaf>,
}

impl DvTransferEntropy {
    /// Creates a new estimator.
    ///
    /// # Arguments
    /// * `measure`: Which variant to estimate.
    /// * `signals`: Input signals in the order documented on [`DvMeasure`].
    /// * `params`: Embedding and partitioning parameters.
    ///
    /// # Errors
    /// Length mismatch between the signals, too few samples for the
    /// requested embedding, invalid parameters or non-finite samples.
    pub fn new(measure: DvMeasure, signals: &[&[f64]], params: DvParams) -> Result<Self> {
        params.validate()?;
        validate_signals(measure, signals)?;

        let d_emb = params.embedding_dimension;
        let tau = params.time_delay;
        let layout = measure.layout();

        let k = layout.joint_dims(d_emb);
        if k > MAX_JOINT_DIMENSIONS {
            return Err(DvError::DimensionTooLarge {
                dims: k,
                max: MAX_JOINT_DIMENSIONS,
            });
        }

        let rows = embedded_len(signals[0].len(), d_emb, tau)?;
        let blocks = EmbeddedBlocks::new(signals, rows, d_emb, tau)?;

        let joint = blocks.stack(&layout.joint)?;
        let b = Marginal {
            points: blocks.stack(&layout.b)?,
            ranges: layout.ranges(&layout.b, d_emb),
        };
        let c = Marginal {
            points: blocks.stack(&layout.c)?,
            ranges: layout.ranges(&layout.c, d_emb),
        };
        let d = Marginal {
            points: blocks.stack(&layout.d)?,
            ranges: layout.ranges(&layout.d, d_emb),
        };

        let leaves = partition::partition(joint.view(), params.alpha, params.root_split)?;
        debug!(
            "{}: {} samples, {} joint dimensions, {} leaves",
            measure.name(),
            rows,
            k,
            leaves.len()
        );

        Ok(Self {
            measure,
            params,
            joint,
            b,
            c,
            d,
            leaves,
        })
    }

    pub fn measure(&self) -> DvMeasure {
        self.measure
    }

    pub fn params(&self) -> &DvParams {
        &self.params
    }

    /// Number of embedded samples `N`.
    pub fn n_samples(&self) -> usize {
        self.joint.nrows()
    }

    /// The joint point cloud in rank space.
    pub fn joint_cloud(&self) -> ArrayView2<'_, usize> {
        self.joint.view()
    }

    /// Leaves of the DV partition of the joint cloud.
    pub fn partition(&self) -> &[Leaf] {
        &self.leaves
    }

    /// `log2(n_a n_b) - log2(n_c n_d)` for one leaf, `None` under the zero-count guard.
    fn leaf_log_ratio(&self, leaf: &Leaf) -> Option<f64> {
        let na = leaf.n;
        let nb = self.b.count(leaf);
        let nc = self.c.count(leaf);
        let nd = self.d.count(leaf);
        if na == 0 || nb == 0 || nc == 0 || nd == 0 {
            return None;
        }
        let ratio = (na as f64 * nb as f64).log2() - (nc as f64 * nd as f64).log2();
        trace!("leaf n_a={na} n_b={nb} n_c={nc} n_d={nd} -> {ratio:.6}");
        Some(ratio)
    }

    /// Log ratio of every leaf, in partition order, zero for guarded leaves.
    fn leaf_log_ratios(&self) -> Vec<f64> {
        let mut skipped = 0usize;
        let ratios: Vec<f64> = self
            .leaves
            .iter()
            .map(|leaf| {
                self.leaf_log_ratio(leaf).unwrap_or_else(|| {
                    skipped += 1;
                    0.0
                })
            })
            .collect();
        if skipped > 0 {
            warn!(
                "{}: {} of {} leaves skipped because of zero counts",
                self.measure.name(),
                skipped,
                self.leaves.len()
            );
        }
        ratios
    }
}

impl GlobalValue for DvTransferEntropy {
    fn global_value(&self) -> f64 {
        let n_total = self.n_samples() as f64;
        if n_total == 0.0 {
            return 0.0;
        }
        self.leaves
            .iter()
            .zip(self.leaf_log_ratios())
            .map(|(leaf, ratio)| leaf.n as f64 / n_total * ratio)
            .sum()
    }
}

impl LocalValues for DvTransferEntropy {
    /// Each sample receives the log ratio of the leaf it falls into.
    fn local_values(&self) -> Array1<f64> {
        let mut local = Array1::zeros(self.n_samples());
        let ratios = self.leaf_log_ratios();
        for (i, point) in self.joint.axis_iter(Axis(0)).enumerate() {
            if let Some(pos) = self.leaves.iter().position(|leaf| leaf.contains(point)) {
                local[i] = ratios[pos];
            }
        }
        local
    }
}

impl OptionalLocalValues for DvTransferEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl TransferEntropyEstimator for DvTransferEntropy {}

fn validate_signals(measure: DvMeasure, signals: &[&[f64]]) -> Result<()> {
    if signals.len() != measure.n_signals() {
        return Err(DvError::InvalidParameter {
            name: "signals",
            reason: format!(
                "{} expects {} signals, got {}",
                measure.name(),
                measure.n_signals(),
                signals.len()
            ),
        });
    }
    let lengths: Vec<usize> = signals.iter().map(|s| s.len()).collect();
    if lengths.windows(2).any(|w| w[0] != w[1]) {
        error!("{}: signals should have the same length, got {:?}", measure.name(), lengths);
        return Err(DvError::LengthMismatch { lengths });
    }
    if lengths[0] == 0 {
        return Err(DvError::EmptySignal);
    }
    for signal in signals {
        if let Some(index) = signal.iter().position(|v| !v.is_finite()) {
            return Err(DvError::NonFiniteSample { index });
        }
    }
    Ok(())
}

/// Ranked future and past blocks of all input signals.
struct EmbeddedBlocks {
    futures: Vec<Array2<usize>>,
    pasts: Vec<Array2<usize>>,
}

impl EmbeddedBlocks {
    fn new(signals: &[&[f64]], rows: usize, embedding_dimension: usize, time_delay: usize) -> Result<Self> {
        let mut futures = Vec::with_capacity(signals.len());
        let mut pasts = Vec::with_capacity(signals.len());
        for signal in signals {
            let future = embed_future(signal, embedding_dimension, time_delay)?;
            let past = embed_past(signal, embedding_dimension, time_delay)?;
            debug_assert_eq!(future.len(), rows);
            debug_assert_eq!(past.nrows(), rows);
            futures.push(future.insert_axis(Axis(1)));
            pasts.push(past);
        }
        Ok(Self { futures, pasts })
    }

    fn block(&self, block: Block) -> ArrayView2<'_, usize> {
        match block {
            Block::Future(i) => self.futures[i].view(),
            Block::Past(i) => self.pasts[i].view(),
        }
    }

    fn stack(&self, blocks: &[Block]) -> Result<Array2<usize>> {
        let views: Vec<ArrayView2<'_, usize>> = blocks.iter().map(|&b| self.block(b)).collect();
        concatenate(Axis(1), &views).map_err(|e| DvError::InvalidParameter {
            name: "signals",
            reason: format!("embedded blocks are not aligned: {e}"),
        })
    }
}
