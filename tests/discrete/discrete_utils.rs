// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use inform::estimators::approaches::discrete::discrete_utils::{
    compact_codes, support_size,
};
use inform::estimators::utils::state_encoding::{decode, encode};
use rstest::*;

#[rstest]
#[case(vec![], vec![], 0)]
#[case(vec![10, 20, 10, 30], vec![0, 1, 0, 2], 3)]
#[case(vec![1, 1, 1, 1], vec![0, 0, 0, 0], 1)]
#[case(vec![5, 4, 3, 2, 1, 0], vec![0, 1, 2, 3, 4, 5], 6)]
#[case(vec![u64::MAX, 0, u64::MAX], vec![0, 1, 0], 2)]
fn test_compact_codes(#[case] data: Vec<u64>, #[case] expected: Vec<u64>, #[case] unique: usize) {
    assert_eq!(compact_codes(&data), (expected, unique));
}

#[rstest]
#[case(2, 1, 2)]
#[case(2, 10, 1024)]
#[case(3, 4, 81)]
fn test_support_size(#[case] base: u64, #[case] exponent: usize, #[case] expected: usize) {
    assert_eq!(support_size(base, exponent), Ok(expected));
}

#[rstest]
#[case(vec![0, 1, 1], 2, 3)]
#[case(vec![2, 0, 1], 3, 19)]
#[case(vec![9], 10, 9)]
fn test_encode_decode(#[case] window: Vec<u64>, #[case] base: u64, #[case] code: u64) {
    assert_eq!(encode(&window, base), Ok(code));
    assert_eq!(decode(code, window.len(), base), Ok(window));
}
