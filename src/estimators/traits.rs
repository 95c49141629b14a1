// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::measure::{Measure, Undefined};

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> Measure;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local (per-observation) values of the measure.
    fn local_values(&self) -> Result<Array1<f64>, Undefined>;

    /// Derive global_value as the mean of local values.
    fn global_from_local(&self) -> Measure {
        match self.local_values() {
            Ok(local_vals) => local_vals
                .mean()
                .map_or(Measure::Undefined(Undefined::InvalidDistribution), Measure::from),
            Err(reason) => Measure::Undefined(reason),
        }
    }
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators that do support local values should return supports_local() = true
/// and provide local values via `Ok(Array1<f64>)`. Estimators that do not support
/// local values should return supports_local() = false and an Err with a brief reason.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str>;
}

/// Every estimator with local values supports them optionally as well.
impl<T: LocalValues> OptionalLocalValues for T {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        self.local_values()
            .map_err(|_| "The measure is undefined for this data.")
    }
}
