// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::*;
use dv_entropy::{
    DvMeasure, DvParams, GlobalValue, TransferEntropy, conditional_joint_transfer_entropy,
    conditional_joint_transfer_entropy_given_driver, conditional_transfer_entropy,
    joint_transfer_entropy, transfer_entropy,
};
use rstest::rstest;

#[rstest]
#[case(0.5, 0.05)]
#[case(1.0, 0.2)]
fn test_conditioning_on_common_driver_removes_spurious_transfer(
    #[case] coupling: f64,
    #[case] min_gap: f64,
) {
    init_logging();
    let params = DvParams::default();

    let (x0, y0, z0) = common_driver(1000, 0.0, 7);
    let te_uncoupled = transfer_entropy(&x0, &y0, params).unwrap();
    let cte_uncoupled = conditional_transfer_entropy(&x0, &y0, &z0, params).unwrap();

    let (x, y, z) = common_driver(1000, coupling, 7);
    let te = transfer_entropy(&x, &y, params).unwrap();
    let cte = conditional_transfer_entropy(&x, &y, &z, params).unwrap();

    assert!(
        te > te_uncoupled + min_gap,
        "coupling {coupling}: TE {te}, uncoupled {te_uncoupled}"
    );
    assert!(cte < te - min_gap, "coupling {coupling}: CTE {cte} vs TE {te}");
    assert!(cte_uncoupled.abs() < 0.2, "uncoupled CTE was {cte_uncoupled}");
}

#[test]
fn test_joint_te_exceeds_single_driver_te() {
    let (x, y, z) = two_driver_target(1000, 1.0, 1.0, 19);
    let params = DvParams::default();
    let jte = joint_transfer_entropy(&x, &y, &z, params).unwrap();
    let te_x = transfer_entropy(&z, &x, params).unwrap();
    let te_y = transfer_entropy(&z, &y, params).unwrap();
    assert!(jte > te_x + 0.2, "JTE {jte} vs TE x->z {te_x}");
    assert!(jte > te_y + 0.2, "JTE {jte} vs TE y->z {te_y}");
}

#[test]
fn test_joint_te_is_symmetric_in_its_drivers() {
    let (x, y, z) = two_driver_target(600, 0.8, 0.4, 23);
    let params = DvParams::default();
    let xy = joint_transfer_entropy(&x, &y, &z, params).unwrap();
    let yx = joint_transfer_entropy(&y, &x, &z, params).unwrap();
    assert_relative_eq!(xy, yx, epsilon = 1e-9);
}

#[test]
fn test_given_driver_removes_the_conditioned_driver() {
    // z depends on y only, so x adds nothing once y's past is known
    let (x, y, z) = two_driver_target(1000, 0.0, 1.0, 29);
    let params = DvParams::default();
    let jte = joint_transfer_entropy(&x, &y, &z, params).unwrap();
    let given = conditional_joint_transfer_entropy_given_driver(&x, &y, &z, params).unwrap();
    assert!(jte > 0.5, "JTE was {jte}");
    assert!(given < jte - 0.3, "given-driver {given} vs JTE {jte}");
}

#[test]
fn test_given_driver_keeps_the_other_driver() {
    let (x, y, z) = two_driver_target(1000, 1.0, 1.0, 37);
    let given =
        conditional_joint_transfer_entropy_given_driver(&x, &y, &z, DvParams::default()).unwrap();
    assert!(given > 0.3, "given-driver TE was {given}");
}

#[test]
fn test_given_driver_shares_the_joint_partition() {
    let (x, y, z) = two_driver_target(500, 0.7, 0.7, 41);
    let params = DvParams::default();
    let joint = TransferEntropy::new_dv_joint(&x, &y, &z, params).unwrap();
    let given = TransferEntropy::new_dv_conditional_joint_given_driver(&x, &y, &z, params).unwrap();
    assert_eq!(joint.partition(), given.partition());
    assert_eq!(given.measure(), DvMeasure::ConditionalJointGivenDriver);
}

#[test]
fn test_conditional_joint_te_with_irrelevant_condition() {
    let (x, y, z) = two_driver_target(1000, 1.0, 1.0, 43);
    let w = white_noise(1000, 1.0, 44);
    let params = DvParams::default();
    let cjte = conditional_joint_transfer_entropy(&x, &y, &z, &w, params).unwrap();
    assert!(cjte > 0.3, "CJTE was {cjte}");

    let est = TransferEntropy::new_dv_conditional_joint(&x, &y, &z, &w, params).unwrap();
    assert_eq!(est.joint_cloud().ncols(), 5);
    assert_eq!(est.global_value(), cjte);
}

#[test]
fn test_factory_matches_free_functions() {
    let (x, y, z) = two_driver_target(400, 0.5, 0.5, 47);
    let params = DvParams::default().with_embedding_dimension(2);
    let est = TransferEntropy::new_dv_conditional(&z, &x, &y, params).unwrap();
    let value = conditional_transfer_entropy(&z, &x, &y, params).unwrap();
    assert_eq!(est.global_value(), value);
    assert_eq!(est.joint_cloud().ncols(), 7);
    assert_eq!(est.n_samples(), 398);
}
