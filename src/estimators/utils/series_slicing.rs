// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{InformError, Result};
use crate::estimators::measure::Undefined;

/// Check the dimensions shared by the time-series estimators.
///
/// Every series in `series` is a flat ensemble of `num_realizations` blocks of
/// `steps` symbols. `Err` is an operational failure; `Ok(Some(reason))` means
/// the call is well-formed but the estimate is undefined.
pub fn check_dimensions(
    series: &[&[u64]],
    num_realizations: usize,
    steps: usize,
    base: u64,
    k: usize,
) -> Result<Option<Undefined>> {
    if base < 2 {
        return Err(InformError::InvalidBase(base));
    }
    if k == 0 {
        return Err(InformError::ZeroHistory);
    }
    if series.iter().any(|s| s.is_empty()) {
        return Ok(Some(Undefined::MissingSeries));
    }
    if num_realizations < 1 {
        return Ok(Some(Undefined::NoRealizations));
    }
    if steps <= 1 {
        return Ok(Some(Undefined::ShortSeries));
    }
    if steps <= k {
        return Ok(Some(Undefined::HistoryTooLong { k, steps }));
    }
    let expected = num_realizations.checked_mul(steps).unwrap_or(usize::MAX);
    if let Some(s) = series.iter().find(|s| s.len() != expected) {
        return Err(InformError::LengthMismatch {
            expected,
            got: s.len(),
        });
    }
    Ok(None)
}

/// A `k`-symbol history followed by the next symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow<'a> {
    pub history: &'a [u64],
    pub future: u64,
}

/// A target history and future together with the concurrent source symbol.
///
/// `source` is aligned with the last symbol of `history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferWindow<'a> {
    pub history: &'a [u64],
    pub future: u64,
    pub source: u64,
}

/// Slide a window of `k + 1` symbols over one realization.
pub fn history_windows(realization: &[u64], k: usize) -> impl Iterator<Item = HistoryWindow<'_>> {
    realization.windows(k + 1).map(move |w| HistoryWindow {
        history: &w[..k],
        future: w[k],
    })
}

/// Slide a window over aligned source and target realizations.
///
/// The source is offset by `k - 1` so that each source symbol is concurrent
/// with the last symbol of the target history.
pub fn transfer_windows<'a>(
    source: &'a [u64],
    target: &'a [u64],
    k: usize,
) -> impl Iterator<Item = TransferWindow<'a>> {
    let concurrent = source.get(k.saturating_sub(1)..).unwrap_or_default();
    target
        .windows(k + 1)
        .zip(concurrent)
        .map(move |(w, &s)| TransferWindow {
            history: &w[..k],
            future: w[k],
            source: s,
        })
}
