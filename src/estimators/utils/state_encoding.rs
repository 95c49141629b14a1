// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{InformError, Result};
use crate::estimators::measure::Undefined;

/// Maps a window of base-`b` symbols to a single integer state.
///
/// Implementations must be a bijection between windows of length `k` and
/// `0..b^k` for fixed `(k, b)`: identical windows encode identically, and the
/// joint encodings built by the estimators (`history + future * b^k`, ...)
/// rely on the code staying below `b^k`.
pub trait StateEncoder {
    /// Encode `window`, failing with [`InformError::BadState`] if any symbol is `>= base`.
    fn encode(&self, window: &[u64], base: u64) -> Result<u64>;
}

/// Positional base-`b` encoding; the first symbol is the most significant digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseEncoder;

impl StateEncoder for BaseEncoder {
    fn encode(&self, window: &[u64], base: u64) -> Result<u64> {
        encode(window, base)
    }
}

/// Encode a window of symbols as a base-`base` integer.
pub fn encode(window: &[u64], base: u64) -> Result<u64> {
    let mut code: u64 = 0;
    for &state in window {
        if state >= base {
            return Err(InformError::BadState { state, base });
        }
        code = code
            .checked_mul(base)
            .and_then(|c| c.checked_add(state))
            .ok_or(InformError::SupportOverflow {
                base,
                exponent: window.len(),
            })?;
    }
    Ok(code)
}

/// Decode `code` into `len` base-`base` symbols, most significant first.
pub fn decode(mut code: u64, len: usize, base: u64) -> Result<Vec<u64>> {
    if base < 2 {
        return Err(InformError::InvalidBase(base));
    }
    let mut window = vec![0; len];
    for slot in window.iter_mut().rev() {
        *slot = code % base;
        code /= base;
    }
    if code != 0 {
        return Err(InformError::BadState { state: code, base });
    }
    Ok(window)
}

/// Reason an estimate is undefined after the encoder rejected a window.
pub(crate) fn encoding_failure(err: InformError) -> Undefined {
    match err {
        InformError::BadState { state, base } => Undefined::BadState { state, base },
        _ => Undefined::Indeterminate,
    }
}
