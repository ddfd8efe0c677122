// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Evaluation of an estimator over many subjects and conditions.
//!
//! A failure for one entry is logged and recorded as a missing value; the
//! rest of the batch still runs.

use crate::error::Result;
use log::warn;

/// Input of one subject under one experimental condition.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub subject: String,
    pub condition: String,
    pub data: T,
}

impl<T> Entry<T> {
    pub fn new(subject: impl Into<String>, condition: impl Into<String>, data: T) -> Self {
        Self {
            subject: subject.into(),
            condition: condition.into(),
            data,
        }
    }
}

/// One `(value, condition, subject)` result; `value` is `None` when the
/// estimator failed for this entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub subject: String,
    pub condition: String,
    pub name: String,
    pub value: Option<f64>,
}

/// Run `estimate` on every entry, in order.
pub fn evaluate<T, F>(entries: &[Entry<T>], name: &str, mut estimate: F) -> Vec<Measurement>
where
    F: FnMut(&T) -> Result<f64>,
{
    entries
        .iter()
        .map(|entry| {
            let value = match estimate(&entry.data) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!(
                        "{name} failed for subject {} in condition {}: {e}",
                        entry.subject, entry.condition
                    );
                    None
                }
            };
            Measurement {
                subject: entry.subject.clone(),
                condition: entry.condition.clone(),
                name: name.to_string(),
                value,
            }
        })
        .collect()
}

/// Values recorded for `condition`, skipping missing ones.
pub fn values_for_condition<'a>(
    measurements: &'a [Measurement],
    condition: &'a str,
) -> impl Iterator<Item = f64> + 'a {
    measurements
        .iter()
        .filter(move |m| m.condition == condition)
        .filter_map(|m| m.value)
}
