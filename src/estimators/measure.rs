// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use thiserror::Error;

/// Reason an information measure could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Undefined {
    /// A distribution involved has no observations.
    #[error("distribution has no observations")]
    InvalidDistribution,
    /// The time series is empty.
    #[error("time series is empty")]
    MissingSeries,
    /// The ensemble has no realizations.
    #[error("ensemble has no realizations")]
    NoRealizations,
    /// Fewer than two time steps per realization.
    #[error("time series has fewer than two time steps")]
    ShortSeries,
    /// The history does not leave room for a future state.
    #[error("history length {k} is too long for {steps} time steps")]
    HistoryTooLong { k: usize, steps: usize },
    /// A state lies outside the declared alphabet.
    #[error("state {state} is inconsistent with base {base}")]
    BadState { state: u64, base: u64 },
    /// Arithmetic produced an indeterminate form such as `0/0`.
    #[error("indeterminate form")]
    Indeterminate,
}

/// Value of an information measure.
///
/// `Undefined` is contagious: combining it with anything through `+`, `-`
/// or [`Sum`] yields `Undefined`, keeping the left-most reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Defined(f64),
    Undefined(Undefined),
}

impl Measure {
    pub fn is_defined(&self) -> bool {
        matches!(self, Measure::Defined(_))
    }

    pub fn is_undefined(&self) -> bool {
        !self.is_defined()
    }

    /// The defined value, if any.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Measure::Defined(v) => Some(v),
            Measure::Undefined(_) => None,
        }
    }

    /// Why the measure is undefined, if it is.
    pub fn reason(&self) -> Option<Undefined> {
        match *self {
            Measure::Defined(_) => None,
            Measure::Undefined(r) => Some(r),
        }
    }

    /// The defined value, or the reason it is undefined.
    pub fn into_result(self) -> Result<f64, Undefined> {
        match self {
            Measure::Defined(v) => Ok(v),
            Measure::Undefined(r) => Err(r),
        }
    }

    /// Collapse to a raw `f64`, using NaN for undefined values.
    pub fn to_f64(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    pub fn unwrap_or(&self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }

    /// Apply `f` to a defined value. NaN results become `Indeterminate`.
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Measure {
        match self {
            Measure::Defined(v) => Measure::from(f(v)),
            undefined => undefined,
        }
    }

    fn combine(self, rhs: Measure, op: impl FnOnce(f64, f64) -> f64) -> Measure {
        match (self, rhs) {
            (Measure::Defined(a), Measure::Defined(b)) => Measure::from(op(a, b)),
            (Measure::Undefined(r), _) | (_, Measure::Undefined(r)) => Measure::Undefined(r),
        }
    }
}

impl From<f64> for Measure {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Measure::Undefined(Undefined::Indeterminate)
        } else {
            Measure::Defined(v)
        }
    }
}

impl From<Undefined> for Measure {
    fn from(reason: Undefined) -> Self {
        Measure::Undefined(reason)
    }
}

impl Add for Measure {
    type Output = Measure;

    fn add(self, rhs: Measure) -> Measure {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Sub for Measure {
    type Output = Measure;

    fn sub(self, rhs: Measure) -> Measure {
        self.combine(rhs, |a, b| a - b)
    }
}

impl Neg for Measure {
    type Output = Measure;

    fn neg(self) -> Measure {
        self.map(|v| -v)
    }
}

impl Sum for Measure {
    fn sum<I: Iterator<Item = Measure>>(iter: I) -> Measure {
        iter.fold(Measure::Defined(0.0), Add::add)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Defined(v) => write!(f, "{v}"),
            Measure::Undefined(r) => write!(f, "undefined ({r})"),
        }
    }
}
