// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delay embedding of a single signal into past and future observations.
//!
//! For embedding dimension `d` and delay `tau`, row `r` corresponds to the
//! future sample `t = d * tau + r`. Column `j` of the past block holds the
//! sample at lag `(j + 1) * tau`, most recent lag first:
//!
//! `(x[t - tau], x[t - 2 tau], ..., x[t - d tau])`
//!
//! Both blocks are returned in rank space, each column ranked on its own.

use crate::error::{DvError, Result};
use crate::estimators::utils::rank::{rank_columns, rank_transform};
use ndarray::{Array1, Array2};

/// Number of rows produced for a signal of length `len`.
pub fn embedded_len(len: usize, embedding_dimension: usize, time_delay: usize) -> Result<usize> {
    let span = embedding_dimension * time_delay;
    if len <= span {
        return Err(DvError::InsufficientSamples {
            len,
            embedding_dimension,
            time_delay,
        });
    }
    Ok(len - span)
}

/// Raw (unranked) delay vectors of `signal`.
pub fn delay_vectors(
    signal: &[f64],
    embedding_dimension: usize,
    time_delay: usize,
) -> Result<Array2<f64>> {
    let n = embedded_len(signal.len(), embedding_dimension, time_delay)?;
    let span = embedding_dimension * time_delay;

    let mut out = Array2::zeros((n, embedding_dimension));
    for r in 0..n {
        let t = span + r;
        for j in 0..embedding_dimension {
            out[(r, j)] = signal[t - (j + 1) * time_delay];
        }
    }
    Ok(out)
}

/// Past block in rank space, shape `(len - d * tau, d)`.
pub fn embed_past(
    signal: &[f64],
    embedding_dimension: usize,
    time_delay: usize,
) -> Result<Array2<usize>> {
    let raw = delay_vectors(signal, embedding_dimension, time_delay)?;
    Ok(rank_columns(&raw))
}

/// Future samples in rank space, length `len - d * tau`.
pub fn embed_future(
    signal: &[f64],
    embedding_dimension: usize,
    time_delay: usize,
) -> Result<Array1<usize>> {
    embedded_len(signal.len(), embedding_dimension, time_delay)?;
    Ok(rank_transform(&signal[embedding_dimension * time_delay..]))
}
