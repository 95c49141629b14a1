// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};

/// Self-information `-log_b p(event)` of a single event.
///
/// Undefined if the distribution has no observations. An event that was
/// never observed has infinite self-information.
pub fn self_information(dist: &Distribution, event: u64, base: LogBase) -> Measure {
    if !dist.is_valid() {
        return Measure::Undefined(Undefined::InvalidDistribution);
    }
    Measure::from(-base.log(dist.prob(event)))
}

/// Shannon entropy `H = -Σ p log_b p` of a distribution.
///
/// Events with zero probability contribute nothing (`0 log 0 := 0`).
/// Undefined if the distribution has no observations.
pub fn shannon_entropy(dist: &Distribution, base: LogBase) -> Measure {
    if !dist.is_valid() {
        return Measure::Undefined(Undefined::InvalidDistribution);
    }
    let n = dist.counts() as f64;
    let mut h = 0.0_f64;
    for (_, count) in dist.observed() {
        let p = count as f64 / n;
        h -= p * base.log(p);
    }
    Measure::from(h)
}

/// Entropy estimation methods for various data types
///
/// This struct provides static methods for creating entropy estimators
/// for different types of data and estimation approaches.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete entropy estimator for 1D symbol data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of observed symbols
    ///
    /// # Returns
    ///
    /// A discrete entropy estimator measuring in nats; change the unit with
    /// [`DiscreteEntropy::with_log_base`].
    pub fn new_discrete(data: Array1<u64>) -> Result<DiscreteEntropy> {
        DiscreteEntropy::new(data)
    }

    /// Creates one discrete entropy estimator per row of a 2D array.
    pub fn new_discrete_rows(data: Array2<u64>) -> Result<Vec<DiscreteEntropy>> {
        DiscreteEntropy::from_rows(data)
    }
}
