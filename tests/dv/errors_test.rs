// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::*;
use dv_entropy::{
    DvError, DvMeasure, DvParams, DvTransferEntropy, conditional_joint_transfer_entropy,
    conditional_transfer_entropy, joint_transfer_entropy, transfer_entropy,
};
use rstest::rstest;

#[test]
fn test_length_mismatch_is_rejected() {
    init_logging();
    let x = white_noise(100, 1.0, 1);
    let y = white_noise(99, 1.0, 2);
    let err = transfer_entropy(&x, &y, DvParams::default()).unwrap_err();
    assert_eq!(err, DvError::LengthMismatch { lengths: vec![100, 99] });
}

#[test]
fn test_length_mismatch_in_any_signal() {
    let a = white_noise(50, 1.0, 1);
    let b = white_noise(50, 1.0, 2);
    let short = white_noise(49, 1.0, 3);
    let params = DvParams::default();
    assert!(matches!(
        conditional_transfer_entropy(&a, &b, &short, params),
        Err(DvError::LengthMismatch { .. })
    ));
    assert!(matches!(
        joint_transfer_entropy(&short, &a, &b, params),
        Err(DvError::LengthMismatch { .. })
    ));
    assert!(matches!(
        conditional_joint_transfer_entropy(&a, &b, &a, &short, params),
        Err(DvError::LengthMismatch { .. })
    ));
}

#[rstest]
#[case(5, 3, 2)]
#[case(2, 1, 2)]
#[case(1, 1, 1)]
fn test_insufficient_samples(#[case] len: usize, #[case] d: usize, #[case] tau: usize) {
    let x = white_noise(len, 1.0, 5);
    let y = white_noise(len, 1.0, 6);
    let err = transfer_entropy(&x, &y, DvParams::new(tau, d, 0.05)).unwrap_err();
    assert_eq!(
        err,
        DvError::InsufficientSamples {
            len,
            embedding_dimension: d,
            time_delay: tau,
        }
    );
}

#[test]
fn test_empty_signals() {
    let err = transfer_entropy(&[], &[], DvParams::default()).unwrap_err();
    assert_eq!(err, DvError::EmptySignal);
}

#[rstest]
#[case(DvParams::new(0, 1, 0.05), "time_delay")]
#[case(DvParams::new(1, 0, 0.05), "embedding_dimension")]
#[case(DvParams::new(1, 1, 0.0), "alpha")]
#[case(DvParams::new(1, 1, 1.0), "alpha")]
#[case(DvParams::new(1, 1, f64::NAN), "alpha")]
fn test_invalid_parameters(#[case] params: DvParams, #[case] field: &str) {
    let x = white_noise(100, 1.0, 1);
    let err = transfer_entropy(&x, &x, params).unwrap_err();
    match err {
        DvError::InvalidParameter { name, .. } => assert_eq!(name, field),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_infinite_sample_is_rejected() {
    let x = white_noise(100, 1.0, 1);
    let mut y = white_noise(100, 1.0, 2);
    y[17] = f64::INFINITY;
    let err = transfer_entropy(&x, &y, DvParams::default()).unwrap_err();
    assert_eq!(err, DvError::NonFiniteSample { index: 17 });
}

#[test]
fn test_joint_dimensionality_is_bounded() {
    // 1 + 4 * 8 = 33 joint columns
    let signal = white_noise(200, 1.0, 3);
    let params = DvParams::default().with_embedding_dimension(8);
    let err = DvTransferEntropy::new(
        DvMeasure::ConditionalJoint,
        &[&signal, &signal, &signal, &signal],
        params,
    )
    .err()
    .unwrap();
    assert_eq!(err, DvError::DimensionTooLarge { dims: 33, max: 32 });
}
