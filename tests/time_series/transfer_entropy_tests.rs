// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use inform::estimators::transfer_entropy::{
    TransferEntropy, TransferEntropyDistributions, transfer_entropy, transfer_entropy_ensemble,
};
use inform::estimators::{GlobalValue, LocalValues};
use inform::{InformError, LogBase, Measure, Undefined};
use ndarray::{Array1, Array2, array};
use rstest::rstest;

use crate::test_helpers::{assert_measure_close, generate_coupled_pair, generate_random_series};

#[test]
fn test_known_value_and_reverse_direction() {
    let source = [0, 1, 1, 1, 1, 0, 0, 0, 0];
    let target = [0, 0, 1, 1, 1, 1, 0, 0, 0];
    assert_measure_close(
        transfer_entropy(&source, &target, 2, 2).unwrap(),
        0.6792696431662097,
        1e-12,
    );
    assert_measure_close(transfer_entropy(&target, &source, 2, 2).unwrap(), 0.0, 1e-12);
}

#[test]
fn test_ensemble_value() {
    let source = [1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1];
    let target = [0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0];
    assert_measure_close(
        transfer_entropy_ensemble(&source, &target, 2, 9, 2, 2).unwrap(),
        0.6935361388961918,
        1e-12,
    );
}

#[rstest]
#[case(0.0, 0.99)]
#[case(0.1, 0.45)]
fn test_coupled_series_are_asymmetric(#[case] noise: f64, #[case] lower_bound: f64) {
    let (source, target) = generate_coupled_pair(10_000, noise, 5);
    let forward = transfer_entropy(&source, &target, 2, 1).unwrap().value().unwrap();
    let backward = transfer_entropy(&target, &source, 2, 1).unwrap().value().unwrap();
    assert!(forward > lower_bound, "forward TE {forward}");
    assert!(backward < 0.01, "backward TE {backward}");
}

#[rstest]
#[case(2, 1)]
#[case(3, 2)]
#[case(4, 1)]
fn test_self_transfer_is_zero(#[case] base: u64, #[case] seed: u64) {
    let series = generate_random_series(1000, base, seed);
    assert_measure_close(transfer_entropy(&series, &series, base, 1).unwrap(), 0.0, 1e-12);
}

#[test]
fn test_undefined_reasons() {
    let series = [0, 1, 0, 1];
    assert_eq!(
        transfer_entropy(&[], &series, 2, 1).unwrap(),
        Measure::Undefined(Undefined::MissingSeries)
    );
    assert_eq!(
        transfer_entropy_ensemble(&series, &series, 2, 2, 2, 2).unwrap(),
        Measure::Undefined(Undefined::HistoryTooLong { k: 2, steps: 2 })
    );
    assert_eq!(
        transfer_entropy(&[0, 3, 0, 1], &series, 2, 1).unwrap(),
        Measure::Undefined(Undefined::BadState { state: 3, base: 2 })
    );
    assert_eq!(
        transfer_entropy(&series, &[0, 1, 0, 2], 2, 1).unwrap(),
        Measure::Undefined(Undefined::BadState { state: 2, base: 2 })
    );
}

#[test]
fn test_argument_errors() {
    let series = [0, 1, 0, 1];
    assert_eq!(
        transfer_entropy(&series, &series, 0, 1),
        Err(InformError::InvalidBase(0))
    );
    assert_eq!(
        transfer_entropy(&series, &series, 2, 0),
        Err(InformError::ZeroHistory)
    );
    assert_eq!(
        transfer_entropy(&[0, 1, 0], &series, 2, 1),
        Err(InformError::LengthMismatch { expected: 4, got: 3 })
    );
}

#[test]
fn test_local_values_average_to_global() {
    let (source, target) = generate_coupled_pair(2000, 0.2, 17);
    let est = TransferEntropy::new(&Array1::from(source), &Array1::from(target), 2, 2).unwrap();
    let locals = est.local_values().unwrap();
    assert_eq!(locals.len(), 1998);
    assert_abs_diff_eq!(
        locals.mean().unwrap(),
        est.global_value().value().unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_ensemble_estimator() {
    let source = array![[1, 0, 0, 0, 0, 1, 1, 1, 1], [1, 1, 1, 1, 0, 0, 0, 1, 1]];
    let target = array![[0, 0, 1, 1, 1, 1, 0, 0, 0], [1, 0, 0, 0, 0, 1, 1, 1, 0]];
    let est = TransferEntropy::new_ensemble(&source, &target, 2, 2).unwrap();
    assert_measure_close(est.global_value(), 0.6935361388961918, 1e-12);

    let nats = TransferEntropy::new_ensemble(&source, &target, 2, 2)
        .unwrap()
        .with_log_base(LogBase::NATS);
    assert_measure_close(nats.global_value(), 0.6935361388961918 * 2f64.ln(), 1e-12);

    let dists = est.distributions().unwrap();
    assert_eq!(dists.states.size(), 16);
    assert_eq!(dists.sources.size(), 8);
    assert_eq!(dists.predicates.size(), 8);
    assert_eq!(dists.histories.counts(), 14);
}

#[test]
fn test_ensemble_shapes_must_match() {
    let source = Array2::from_shape_vec((1, 18), vec![0; 18]).unwrap();
    let target = Array2::from_shape_vec((2, 9), vec![0; 18]).unwrap();
    assert!(matches!(
        TransferEntropy::new_ensemble(&source, &target, 2, 2),
        Err(InformError::LengthMismatch { expected: 9, got: 18 })
    ));

    let source = Array2::from_shape_vec((3, 6), vec![0; 18]).unwrap();
    let target = Array2::from_shape_vec((2, 6), vec![0; 12]).unwrap();
    assert!(matches!(
        TransferEntropy::new_ensemble(&source, &target, 2, 2),
        Err(InformError::LengthMismatch { expected: 12, got: 18 })
    ));
}

#[test]
fn test_incremental_observation() {
    let mut dists = TransferEntropyDistributions::new(2, 2).unwrap();
    dists
        .observe(&[1, 0, 0, 0, 0, 1, 1, 1, 1], &[0, 0, 1, 1, 1, 1, 0, 0, 0])
        .unwrap();
    dists
        .observe(&[1, 1, 1, 1, 0, 0, 0, 1, 1], &[1, 0, 0, 0, 0, 1, 1, 1, 0])
        .unwrap();
    assert_measure_close(
        dists.transfer_entropy(LogBase::BITS),
        0.6935361388961918,
        1e-12,
    );
    assert_eq!(dists.history_length(), 2);
}

#[test]
fn test_empty_accumulator_is_undefined() {
    let dists = TransferEntropyDistributions::new(3, 1).unwrap();
    assert_eq!(dists.base(), 3);
    assert_eq!(
        dists.transfer_entropy(LogBase::BITS),
        Measure::Undefined(Undefined::InvalidDistribution)
    );
}
