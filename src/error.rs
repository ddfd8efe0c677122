// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DvError>;

/// Failures reported to callers of the DV estimators.
///
/// Degenerate partition geometry never surfaces here; it is absorbed by the
/// partitioner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DvError {
    #[error("signals must have the same length, got {lengths:?}")]
    LengthMismatch { lengths: Vec<usize> },

    #[error(
        "insufficient samples for embedding: length {len} must exceed \
         embedding_dimension * time_delay = {embedding_dimension} * {time_delay}"
    )]
    InsufficientSamples {
        len: usize,
        embedding_dimension: usize,
        time_delay: usize,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("joint dimensionality {dims} exceeds the supported maximum of {max}")]
    DimensionTooLarge { dims: usize, max: usize },

    #[error("signal is empty")]
    EmptySignal,
}
