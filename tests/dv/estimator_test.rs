// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::*;
use dv_entropy::{DvParams, RootSplit, TransferEntropy, transfer_entropy};
use rstest::rstest;

fn mean_te(seeds: &[u64], mut f: impl FnMut(u64) -> f64) -> f64 {
    seeds.iter().map(|&s| f(s)).sum::<f64>() / seeds.len() as f64
}

#[test]
fn test_transfer_entropy_is_deterministic() {
    init_logging();
    let (x, y) = bivariate_ar(600, 0.8, 100, 3);
    let params = DvParams::default();
    let a = transfer_entropy(&y, &x, params).unwrap();
    let b = transfer_entropy(&y, &x, params).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_invariant_under_strictly_increasing_transform() {
    let (x, y) = bivariate_ar(700, 0.6, 100, 8);
    let x_mapped: Vec<f64> = x.iter().map(|v| v.exp()).collect();
    let y_mapped: Vec<f64> = y.iter().map(|v| 3.0 * v + 2.0).collect();

    let params = DvParams::default().with_embedding_dimension(2);
    let original = transfer_entropy(&y, &x, params).unwrap();
    let mapped = transfer_entropy(&y_mapped, &x_mapped, params).unwrap();
    assert_eq!(original, mapped);
}

#[rstest]
#[case(RootSplit::Forced)]
#[case(RootSplit::Tested)]
fn test_independent_signals_have_near_zero_te(#[case] root_split: RootSplit) {
    let x = white_noise(1000, 1.0, 21);
    let y = white_noise(1000, 1.0, 22);
    let params = DvParams::default().with_root_split(root_split);
    let te = transfer_entropy(&x, &y, params).unwrap();
    assert!(te.abs() < 0.1, "TE between independent signals was {te}");
}

#[test]
fn test_driver_direction_dominates() {
    init_logging();
    let (x, y) = driven_pair(1000, 31);
    let params = DvParams::default();
    // first argument is the effect
    let x_to_y = transfer_entropy(&y, &x, params).unwrap();
    let y_to_x = transfer_entropy(&x, &y, params).unwrap();
    assert!(x_to_y > 0.15, "TE x->y was {x_to_y}");
    assert!(x_to_y > y_to_x + 0.1, "TE x->y {x_to_y} vs y->x {y_to_x}");
}

#[test]
fn test_te_grows_with_coupling() {
    let seeds = [1, 2, 3];
    let params = DvParams::default();
    let te_at = |a: f64| {
        mean_te(&seeds, |seed| {
            let (x, y) = bivariate_ar(1000, a, 200, seed);
            transfer_entropy(&y, &x, params).unwrap()
        })
    };
    let weak = te_at(0.0);
    let medium = te_at(0.5);
    let strong = te_at(1.0);
    assert!(medium > weak, "a=0.5 gave {medium}, a=0 gave {weak}");
    assert!(strong > medium, "a=1 gave {strong}, a=0.5 gave {medium}");
}

#[rstest]
#[case(1, 1)]
#[case(2, 1)]
#[case(1, 3)]
#[case(3, 2)]
fn test_finite_for_embedding_parameters(#[case] d: usize, #[case] tau: usize) {
    let (x, y) = driven_pair(500, 4);
    let params = DvParams::new(tau, d, 0.05);
    let te = transfer_entropy(&y, &x, params).unwrap();
    assert!(te.is_finite());
}

#[test]
fn test_tied_samples_are_handled() {
    let (x, y) = driven_pair(800, 13);
    let x_tied = quantised(&x, 1.0);
    let y_tied = quantised(&y, 1.0);
    let params = DvParams::default();
    let te = transfer_entropy(&y_tied, &x_tied, params).unwrap();
    let again = transfer_entropy(&y_tied, &x_tied, params).unwrap();
    assert!(te.is_finite());
    assert_eq!(te, again);

    // every joint column stays a permutation of 1..=N despite the ties
    let est = TransferEntropy::new_dv(&y_tied, &x_tied, params).unwrap();
    let n = est.n_samples();
    let expected: Vec<usize> = (1..=n).collect();
    for column in est.joint_cloud().columns() {
        let mut ranks = column.to_vec();
        ranks.sort_unstable();
        assert_eq!(ranks, expected);
    }
    assert!(y_tied.iter().filter(|&&v| v == 0.0).count() > 100);
}

#[test]
fn test_constant_signals_give_finite_te() {
    let x = vec![1.0; 200];
    let y = vec![2.0; 200];
    let te = transfer_entropy(&x, &y, DvParams::default()).unwrap();
    assert!(te.is_finite());
}
