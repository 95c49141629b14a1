// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::f64::consts::{LN_2, LN_10};

use crate::error::{InformError, Result};

/// Logarithm base used to express an information measure.
///
/// The base only rescales units; every distribution entering one computation
/// must be measured with the same `LogBase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBase {
    base: f64,
    ln_base: f64,
}

impl LogBase {
    /// Base 2.
    pub const BITS: LogBase = LogBase { base: 2.0, ln_base: LN_2 };
    /// Base e.
    pub const NATS: LogBase = LogBase { base: std::f64::consts::E, ln_base: 1.0 };
    /// Base 10.
    pub const HARTLEYS: LogBase = LogBase { base: 10.0, ln_base: LN_10 };

    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(InformError::InvalidLogBase(base));
        }
        Ok(Self { base, ln_base: base.ln() })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    /// `log_base(x)`.
    #[inline]
    pub fn log(&self, x: f64) -> f64 {
        x.ln() / self.ln_base
    }
}

impl Default for LogBase {
    fn default() -> Self {
        LogBase::NATS
    }
}

impl TryFrom<u64> for LogBase {
    type Error = InformError;

    /// Use an alphabet size as the logarithm base.
    fn try_from(alphabet: u64) -> Result<Self> {
        if alphabet < 2 {
            return Err(InformError::InvalidBase(alphabet));
        }
        LogBase::new(alphabet as f64)
    }
}
