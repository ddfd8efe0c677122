// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::Result;
use crate::estimators::approaches::dv::{DvMeasure, DvParams, DvTransferEntropy};
use crate::estimators::traits::GlobalValue;

/// Factory for the DV transfer entropy estimators.
///
/// The first signal of every constructor is the effect whose future is
/// predicted, following the argument order of the free functions below.
pub struct TransferEntropy;

impl TransferEntropy {
    /// `TE_{Y->X}`: information the past of `y` adds about the future of `x`.
    pub fn new_dv(x: &[f64], y: &[f64], params: DvParams) -> Result<DvTransferEntropy> {
        DvTransferEntropy::new(DvMeasure::Transfer, &[x, y], params)
    }

    /// `TE_{Y->X|Z}`: as [`TransferEntropy::new_dv`], conditioned on the past of `z`.
    pub fn new_dv_conditional(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        params: DvParams,
    ) -> Result<DvTransferEntropy> {
        DvTransferEntropy::new(DvMeasure::Conditional, &[x, y, z], params)
    }

    /// `TE_{(X,Y)->Z}`: joint influence of `x` and `y` on the future of `z`.
    pub fn new_dv_joint(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        params: DvParams,
    ) -> Result<DvTransferEntropy> {
        DvTransferEntropy::new(DvMeasure::Joint, &[x, y, z], params)
    }

    /// `TE_{(X,Y)->Z|W}`.
    pub fn new_dv_conditional_joint(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        w: &[f64],
        params: DvParams,
    ) -> Result<DvTransferEntropy> {
        DvTransferEntropy::new(DvMeasure::ConditionalJoint, &[x, y, z, w], params)
    }

    /// `TE_{(X,Y)->Z|Y}`: conditional joint TE with the driver `y` as condition.
    pub fn new_dv_conditional_joint_given_driver(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        params: DvParams,
    ) -> Result<DvTransferEntropy> {
        DvTransferEntropy::new(DvMeasure::ConditionalJointGivenDriver, &[x, y, z], params)
    }
}

/// Transfer entropy `TE_{Y->X}` in bits.
///
/// ```
/// use dv_entropy::{transfer_entropy, DvParams};
///
/// let x: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64).collect();
/// let y: Vec<f64> = (0..200).map(|i| ((i * 53) % 97) as f64).collect();
/// let te = transfer_entropy(&x, &y, DvParams::default()).unwrap();
/// assert!(te.is_finite());
/// ```
pub fn transfer_entropy(x: &[f64], y: &[f64], params: DvParams) -> Result<f64> {
    Ok(TransferEntropy::new_dv(x, y, params)?.global_value())
}

/// Conditional transfer entropy `TE_{Y->X|Z}` in bits.
pub fn conditional_transfer_entropy(x: &[f64], y: &[f64], z: &[f64], params: DvParams) -> Result<f64> {
    Ok(TransferEntropy::new_dv_conditional(x, y, z, params)?.global_value())
}

/// Joint transfer entropy `TE_{(X,Y)->Z}` in bits.
pub fn joint_transfer_entropy(x: &[f64], y: &[f64], z: &[f64], params: DvParams) -> Result<f64> {
    Ok(TransferEntropy::new_dv_joint(x, y, z, params)?.global_value())
}

/// Conditional joint transfer entropy `TE_{(X,Y)->Z|W}` in bits.
pub fn conditional_joint_transfer_entropy(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    w: &[f64],
    params: DvParams,
) -> Result<f64> {
    Ok(TransferEntropy::new_dv_conditional_joint(x, y, z, w, params)?.global_value())
}

/// Conditional joint transfer entropy `TE_{(X,Y)->Z|Y}` in bits.
pub fn conditional_joint_transfer_entropy_given_driver(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    params: DvParams,
) -> Result<f64> {
    Ok(TransferEntropy::new_dv_conditional_joint_given_driver(x, y, z, params)?.global_value())
}
