// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups the histogram and the plug-in
// estimators built on it and exposes them to the parent approaches module.

pub mod discrete_utils;
pub mod distribution;
pub mod mle;

use ndarray::Array1;

use crate::error::{InformError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{compact_codes, support_size};
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};
use crate::estimators::mutual_information::{mutual_information, pointwise_mutual_information};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::state_encoding::encode;

/// Discrete Mutual Information estimator for two aligned symbol series.
///
/// Each series is relabeled to compact codes in order of first occurrence, and
/// both share the alphabet `b` of the series with more distinct symbols.
/// Joint events are encoded as `x + y * b`, the same positional encoding the
/// marginals use, so every joint event projects onto its marginal events.
pub struct DiscreteMutualInformation {
    joint: Distribution,
    marginal_x: Distribution,
    marginal_y: Distribution,
    events: Vec<[u64; 3]>,
    base: LogBase,
}

impl DiscreteMutualInformation {
    pub fn new(x: &Array1<u64>, y: &Array1<u64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(InformError::LengthMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        let (x, unique_x) = compact_codes(&x.to_vec());
        let (y, unique_y) = compact_codes(&y.to_vec());
        let alphabet = unique_x.max(unique_y).max(2);
        let b = alphabet as u64;

        let mut joint = Distribution::new(support_size(b, 2)?)?;
        let marginal_x = Distribution::from_data(&x, alphabet)?;
        let marginal_y = Distribution::from_data(&y, alphabet)?;

        let mut events = Vec::with_capacity(x.len());
        for (&xi, &yi) in x.iter().zip(&y) {
            let e = encode(&[yi, xi], b)?;
            joint.tick(e);
            events.push([e, xi, yi]);
        }

        Ok(Self {
            joint,
            marginal_x,
            marginal_y,
            events,
            base: LogBase::NATS,
        })
    }

    pub fn with_log_base(mut self, base: LogBase) -> Self {
        self.base = base;
        self
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> Measure {
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        mutual_information(&self.joint, &self.marginal_x, &self.marginal_y, self.base)
    }
}

impl LocalValues for DiscreteMutualInformation {
    fn local_values(&self) -> std::result::Result<Array1<f64>, Undefined> {
        // i(x,y) = log p(x,y) / (p(x) p(y))
        self.events
            .iter()
            .map(|&[e, ex, ey]| {
                pointwise_mutual_information(
                    &self.joint,
                    &self.marginal_x,
                    &self.marginal_y,
                    e,
                    ex,
                    ey,
                    self.base,
                )
                .into_result()
            })
            .collect()
    }
}
