// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use inform::estimators::mutual_information::{
    MutualInformation, conditional_entropy, conditional_mutual_information, mutual_information,
    pointwise_conditional_entropy, pointwise_mutual_information,
};
use inform::estimators::{GlobalValue, LocalValues};
use inform::{Distribution, InformError, LogBase, Measure, Undefined};
use ndarray::{Array1, array};
use rstest::rstest;

use crate::test_helpers::{assert_measure_close, generate_random_series};

/// Joint (x + y * b) and marginal histograms of two aligned series.
fn joint_and_marginals(x: &[u64], y: &[u64], b: u64) -> (Distribution, Distribution, Distribution) {
    let mut joint = Distribution::new((b * b) as usize).unwrap();
    let mut mx = Distribution::new(b as usize).unwrap();
    let mut my = Distribution::new(b as usize).unwrap();
    for (&xi, &yi) in x.iter().zip(y) {
        joint.tick(xi + yi * b);
        mx.tick(xi);
        my.tick(yi);
    }
    (joint, mx, my)
}

#[test]
fn test_independent_futures_have_no_information() {
    let histories = generate_random_series(200_000, 2, 11);
    let futures = generate_random_series(200_000, 2, 12);
    let (joint, mx, my) = joint_and_marginals(&histories, &futures, 2);
    let mi = mutual_information(&joint, &mx, &my, LogBase::BITS);
    assert_measure_close(mi, 0.0, 1e-3);
}

#[test]
fn test_identical_series_share_their_entropy() {
    let x = generate_random_series(1000, 4, 21);
    let (joint, mx, my) = joint_and_marginals(&x, &x, 4);
    let mi = mutual_information(&joint, &mx, &my, LogBase::BITS).value().unwrap();
    let h = inform::estimators::entropy::shannon_entropy(&mx, LogBase::BITS)
        .value()
        .unwrap();
    assert_abs_diff_eq!(mi, h, epsilon = 1e-12);

    let h_cond = conditional_entropy(&joint, &my, LogBase::BITS);
    assert_measure_close(h_cond, 0.0, 1e-12);
}

#[test]
fn test_undefined_operand_poisons_result() {
    let (joint, mx, _) = joint_and_marginals(&[0, 1], &[1, 0], 2);
    let empty = Distribution::new(2).unwrap();
    assert_eq!(
        mutual_information(&joint, &mx, &empty, LogBase::NATS),
        Measure::Undefined(Undefined::InvalidDistribution)
    );
    assert!(pointwise_mutual_information(&joint, &mx, &empty, 2, 0, 1, LogBase::NATS).is_undefined());
    assert!(conditional_entropy(&empty, &mx, LogBase::NATS).is_undefined());
}

#[test]
fn test_pointwise_values_average_to_global() {
    let x = [0, 0, 1, 1, 0, 1, 0, 1];
    let y = [0, 1, 0, 1, 0, 1, 0, 1];
    let (joint, mx, my) = joint_and_marginals(&x, &y, 2);

    let local_mi: f64 = x
        .iter()
        .zip(&y)
        .map(|(&a, &b)| {
            pointwise_mutual_information(&joint, &mx, &my, a + 2 * b, a, b, LogBase::BITS).to_f64()
        })
        .sum::<f64>()
        / x.len() as f64;
    assert_measure_close(mutual_information(&joint, &mx, &my, LogBase::BITS), local_mi, 1e-12);

    let local_hc: f64 = x
        .iter()
        .zip(&y)
        .map(|(&a, &b)| pointwise_conditional_entropy(&joint, &my, a + 2 * b, b, LogBase::BITS).to_f64())
        .sum::<f64>()
        / x.len() as f64;
    assert_measure_close(conditional_entropy(&joint, &my, LogBase::BITS), local_hc, 1e-12);
}

#[test]
fn test_conditional_mutual_information_of_xor() {
    // z = x xor y: x and y are independent, but fully dependent given z
    let mut xyz = Distribution::new(8).unwrap();
    let mut xz = Distribution::new(4).unwrap();
    let mut yz = Distribution::new(4).unwrap();
    let mut z = Distribution::new(2).unwrap();
    for x in 0..2 {
        for y in 0..2 {
            let zi = x ^ y;
            xyz.tick(x + 2 * y + 4 * zi);
            xz.tick(x + 2 * zi);
            yz.tick(y + 2 * zi);
            z.tick(zi);
        }
    }
    let cmi = conditional_mutual_information(&xyz, &xz, &yz, &z, LogBase::BITS);
    assert_measure_close(cmi, 1.0, 1e-12);
}

#[rstest]
#[case(vec![0, 0, 1, 1, 0, 1, 0, 1], vec![0, 1, 0, 1, 0, 1, 0, 1])]
#[case(vec![1, 1, 2, 2, 3, 3], vec![1, 2, 1, 2, 1, 2])]
#[case(generate_random_series(100, 5, 42), generate_random_series(100, 5, 43))]
fn test_discrete_mi_local_mean_matches_global(#[case] x: Vec<u64>, #[case] y: Vec<u64>) {
    let est = MutualInformation::new_discrete(&Array1::from(x), &Array1::from(y)).unwrap();
    let global = est.global_value().value().unwrap();
    let locals = est.local_values().unwrap();
    assert_abs_diff_eq!(locals.mean().unwrap(), global, epsilon = 1e-12);
    assert!(global >= -1e-12);
}

#[test]
fn test_discrete_mi_perfect_dependence() {
    let x = array![0, 1, 2, 3, 0, 1, 2, 3];
    let y = array![3, 2, 1, 0, 3, 2, 1, 0];
    let est = MutualInformation::new_discrete(&x, &y)
        .unwrap()
        .with_log_base(LogBase::BITS);
    assert_measure_close(est.global_value(), 2.0, 1e-12);
}

#[test]
fn test_discrete_mi_sparse_symbols() {
    // relabeling keeps the joint histogram at two by two events
    let x = array![0, 5_000_000_000, 0, 5_000_000_000];
    let est = MutualInformation::new_discrete(&x, &x).unwrap();
    assert_measure_close(est.global_value(), 2f64.ln(), 1e-12);

    let y = array![100_000, 7, 7, 100_000];
    let est = MutualInformation::new_discrete(&x, &y)
        .unwrap()
        .with_log_base(LogBase::BITS);
    assert_measure_close(est.global_value(), 0.0, 1e-12);
}

#[test]
fn test_discrete_mi_length_mismatch() {
    let result = MutualInformation::new_discrete(&array![0, 1, 0], &array![1, 0]);
    assert!(matches!(
        result,
        Err(InformError::LengthMismatch { expected: 3, got: 2 })
    ));
}
