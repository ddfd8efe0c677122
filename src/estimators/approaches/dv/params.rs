// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DvError, Result};

pub const DEFAULT_TIME_DELAY: usize = 1;
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1;
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Treatment of the initial bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RootSplit {
    /// The root box is always split once, whatever the uniformity verdict.
    #[default]
    Forced,
    /// The root box goes through the same uniformity test as every other box.
    /// A globally uniform cloud then yields a single leaf.
    Tested,
}

/// Embedding and partitioning parameters shared by all DV estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DvParams {
    /// Delay `tau` between embedded samples.
    pub time_delay: usize,
    /// Embedding dimension `d` of every past block.
    pub embedding_dimension: usize,
    /// Significance level of the chi-squared uniformity test.
    pub alpha: f64,
    pub root_split: RootSplit,
}

impl Default for DvParams {
    fn default() -> Self {
        Self {
            time_delay: DEFAULT_TIME_DELAY,
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            alpha: DEFAULT_SIGNIFICANCE_LEVEL,
            root_split: RootSplit::default(),
        }
    }
}

impl DvParams {
    pub fn new(time_delay: usize, embedding_dimension: usize, alpha: f64) -> Self {
        Self {
            time_delay,
            embedding_dimension,
            alpha,
            root_split: RootSplit::default(),
        }
    }

    pub fn with_time_delay(mut self, time_delay: usize) -> Self {
        self.time_delay = time_delay;
        self
    }

    pub fn with_embedding_dimension(mut self, embedding_dimension: usize) -> Self {
        self.embedding_dimension = embedding_dimension;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_root_split(mut self, root_split: RootSplit) -> Self {
        self.root_split = root_split;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_delay == 0 {
            return Err(DvError::InvalidParameter {
                name: "time_delay",
                reason: "must be a positive integer".to_string(),
            });
        }
        if self.embedding_dimension == 0 {
            return Err(DvError::InvalidParameter {
                name: "embedding_dimension",
                reason: "must be a positive integer".to_string(),
            });
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DvError::InvalidParameter {
                name: "alpha",
                reason: format!("must lie in (0, 1), got {}", self.alpha),
            });
        }
        Ok(())
    }
}
