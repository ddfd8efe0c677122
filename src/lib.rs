// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # dv-entropy
//!
//! Non-parametric transfer entropy between physiological time series, estimated
//! in rank space with Darbellay-Vajda adaptive partitioning.
//!
//! ## Quick Start
//!
//! ```rust
//! use dv_entropy::{transfer_entropy, conditional_transfer_entropy, DvParams};
//!
//! let x: Vec<f64> = (0..300).map(|i| ((i * 37) % 101) as f64).collect();
//! let y: Vec<f64> = (0..300).map(|i| ((i * 53) % 97) as f64).collect();
//! let z: Vec<f64> = (0..300).map(|i| ((i * 29) % 89) as f64).collect();
//!
//! // TE from y to x, default tau = 1, d = 1, alpha = 0.05
//! let te = transfer_entropy(&x, &y, DvParams::default()).unwrap();
//! let cte = conditional_transfer_entropy(&x, &y, &z, DvParams::default()).unwrap();
//! assert!(te.is_finite() && cte.is_finite());
//! ```
//!
//! ## Measures
//!
//! | Function | Measure |
//! |----------|---------|
//! | `transfer_entropy(x, y)` | TE<sub>Y→X</sub> |
//! | `conditional_transfer_entropy(x, y, z)` | TE<sub>Y→X\|Z</sub> |
//! | `joint_transfer_entropy(x, y, z)` | TE<sub>(X,Y)→Z</sub> |
//! | `conditional_joint_transfer_entropy(x, y, z, w)` | TE<sub>(X,Y)→Z\|W</sub> |
//! | `conditional_joint_transfer_entropy_given_driver(x, y, z)` | TE<sub>(X,Y)→Z\|Y</sub> |
//!
//! All results are in bits. The first argument is always the effect.
//!
//! ## Architecture
//!
//! 1. **Rank transform**: every signal (and every delay column) is replaced
//!    by its ordinal ranks; ties are broken by order of appearance.
//! 2. **Delay embedding**: future sample and past block `(d, tau)` per signal.
//! 3. **DV partitioning**: the joint cloud is split recursively until every
//!    box passes a chi-squared uniformity test.
//! 4. **Region counting**: leaf boxes projected onto the marginal clouds give
//!    the counts of the log-ratio estimator.
//!
//! ## Feature Flags
//!
//! - `serde`: (de)serialisable parameters, leaves and batch measurements
//! - `plotting`: render 2-D partitions to PNG

pub mod batch;
pub mod error;
pub mod estimators;
#[cfg(feature = "plotting")]
pub mod plot;

pub use error::{DvError, Result};
pub use estimators::approaches::dv::{DvMeasure, DvParams, DvTransferEntropy, Leaf, RootSplit};
pub use estimators::transfer_entropy::{
    TransferEntropy, conditional_joint_transfer_entropy, conditional_joint_transfer_entropy_given_driver,
    conditional_transfer_entropy, joint_transfer_entropy, transfer_entropy,
};
pub use estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};
