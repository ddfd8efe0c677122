// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Coordinate layouts of the DV estimators.
//!
//! Every measure is the same sum over the leaves of the joint cloud `a`
//!
//! Σ (n_a / N) (log2(n_a n_b) - log2(n_c n_d))
//!
//! and only differs in which embedded blocks make up `a`, `b`, `c` and `d`.
//! Signals are referred to by their position in the estimator's input.

/// One embedded block of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Future samples of the signal at this input position, one column.
    Future(usize),
    /// Past (delay) block of the signal at this input position, `d` columns.
    Past(usize),
}

impl Block {
    pub fn width(&self, embedding_dimension: usize) -> usize {
        match self {
            Block::Future(_) => 1,
            Block::Past(_) => embedding_dimension,
        }
    }
}

/// The measures supported by the DV estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DvMeasure {
    /// `TE_{Y->X}` for inputs `(x, y)`.
    Transfer,
    /// `TE_{Y->X|Z}` for inputs `(x, y, z)`.
    Conditional,
    /// `TE_{(X,Y)->Z}` for inputs `(x, y, z)`.
    Joint,
    /// `TE_{(X,Y)->Z|W}` for inputs `(x, y, z, w)`.
    ConditionalJoint,
    /// `TE_{(X,Y)->Z|Y}` for inputs `(x, y, z)`: conditioned on the driver `y`.
    ConditionalJointGivenDriver,
}

/// Blocks of the joint cloud and of the three marginal clouds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudLayout {
    pub joint: Vec<Block>,
    pub b: Vec<Block>,
    pub c: Vec<Block>,
    pub d: Vec<Block>,
}

impl DvMeasure {
    /// Number of input signals the measure expects.
    pub fn n_signals(&self) -> usize {
        match self {
            DvMeasure::Transfer => 2,
            DvMeasure::Conditional | DvMeasure::Joint | DvMeasure::ConditionalJointGivenDriver => 3,
            DvMeasure::ConditionalJoint => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DvMeasure::Transfer => "transfer entropy",
            DvMeasure::Conditional => "conditional transfer entropy",
            DvMeasure::Joint => "joint transfer entropy",
            DvMeasure::ConditionalJoint => "conditional joint transfer entropy",
            DvMeasure::ConditionalJointGivenDriver => {
                "conditional joint transfer entropy given driver"
            }
        }
    }

    pub fn layout(&self) -> CloudLayout {
        use Block::{Future, Past};
        match self {
            DvMeasure::Transfer => CloudLayout {
                joint: vec![Future(0), Past(0), Past(1)],
                b: vec![Past(0)],
                c: vec![Future(0), Past(0)],
                d: vec![Past(0), Past(1)],
            },
            DvMeasure::Conditional => CloudLayout {
                joint: vec![Future(0), Past(0), Past(1), Past(2)],
                b: vec![Past(0), Past(2)],
                c: vec![Future(0), Past(0), Past(2)],
                d: vec![Past(0), Past(1), Past(2)],
            },
            DvMeasure::Joint => CloudLayout {
                joint: vec![Future(2), Past(2), Past(0), Past(1)],
                b: vec![Past(2)],
                c: vec![Future(2), Past(2)],
                d: vec![Past(2), Past(0), Past(1)],
            },
            DvMeasure::ConditionalJoint => CloudLayout {
                joint: vec![Future(2), Past(2), Past(0), Past(1), Past(3)],
                b: vec![Past(2), Past(3)],
                c: vec![Future(2), Past(2), Past(3)],
                d: vec![Past(2), Past(0), Past(1), Past(3)],
            },
            DvMeasure::ConditionalJointGivenDriver => CloudLayout {
                joint: vec![Future(2), Past(2), Past(0), Past(1)],
                b: vec![Past(2), Past(1)],
                c: vec![Future(2), Past(2), Past(1)],
                d: vec![Past(2), Past(0), Past(1)],
            },
        }
    }
}

impl CloudLayout {
    /// Total number of columns of the joint cloud.
    pub fn joint_dims(&self, embedding_dimension: usize) -> usize {
        self.joint.iter().map(|b| b.width(embedding_dimension)).sum()
    }

    /// Column ranges `[start, stop)` of `blocks` inside the joint cloud.
    ///
    /// Blocks absent from the joint cloud are skipped.
    pub fn ranges(&self, blocks: &[Block], embedding_dimension: usize) -> Vec<(usize, usize)> {
        let mut offsets = Vec::with_capacity(self.joint.len());
        let mut start = 0;
        for block in &self.joint {
            let stop = start + block.width(embedding_dimension);
            offsets.push((*block, (start, stop)));
            start = stop;
        }
        blocks
            .iter()
            .filter_map(|wanted| {
                offsets
                    .iter()
                    .find(|(block, _)| block == wanted)
                    .map(|&(_, range)| range)
            })
            .collect()
    }
}
