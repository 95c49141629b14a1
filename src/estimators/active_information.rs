// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Active information: the mutual information between the `k`-step history
//! of a process and its next state.
//!
//! For an alphabet of `b` states the history is encoded in `0..b^k` and the
//! joint (history, future) state as `history + future * b^k`, so the three
//! accumulators have supports `b^(k+1)`, `b^k` and `b`. All realizations of an
//! ensemble are accumulated into the same distributions, in order. A single
//! window with a state outside the alphabet makes the whole estimate
//! undefined.

use ndarray::{Array1, Array2};

use crate::error::{InformError, Result};
use crate::estimators::approaches::discrete::discrete_utils::support_size;
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};
use crate::estimators::mutual_information::{mutual_information, pointwise_mutual_information};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::series_slicing::{check_dimensions, history_windows};
use crate::estimators::utils::state_encoding::{BaseEncoder, StateEncoder, encoding_failure};

/// Observed (state, history, future) events of one window.
type Events = [u64; 3];

/// Accumulators for active information with history length `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveInfoDistributions {
    /// Joint (history, future) states, support `b^(k+1)`.
    pub states: Distribution,
    /// Histories, support `b^k`.
    pub histories: Distribution,
    /// Future states, support `b`.
    pub futures: Distribution,
    base: u64,
    k: usize,
}

impl ActiveInfoDistributions {
    pub fn new(base: u64, k: usize) -> Result<Self> {
        if base < 2 {
            return Err(InformError::InvalidBase(base));
        }
        if k == 0 {
            return Err(InformError::ZeroHistory);
        }
        let histories = Distribution::new(support_size(base, k)?)?;
        Ok(Self {
            states: Distribution::new(support_size(base, k + 1)?)?,
            histories,
            futures: Distribution::new(support_size(base, 1)?)?,
            base,
            k,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn history_length(&self) -> usize {
        self.k
    }

    /// Accumulate every window of one realization.
    ///
    /// On failure the windows before the offending one stay counted.
    pub fn observe(&mut self, realization: &[u64]) -> std::result::Result<(), Undefined> {
        self.observe_with(realization, &BaseEncoder)
    }

    /// Like [`observe`](Self::observe), encoding histories with `encoder`.
    pub fn observe_with<E: StateEncoder>(
        &mut self,
        realization: &[u64],
        encoder: &E,
    ) -> std::result::Result<(), Undefined> {
        self.accumulate(realization, encoder, |_| {})
    }

    fn accumulate<E: StateEncoder>(
        &mut self,
        realization: &[u64],
        encoder: &E,
        mut record: impl FnMut(Events),
    ) -> std::result::Result<(), Undefined> {
        let b = self.base;
        let b_k = self.histories.size() as u64;
        for window in history_windows(realization, self.k) {
            let history = encoder.encode(window.history, b).map_err(encoding_failure)?;
            if history >= b_k {
                return Err(Undefined::Indeterminate);
            }
            if window.future >= b {
                return Err(Undefined::BadState {
                    state: window.future,
                    base: b,
                });
            }
            let state = history + window.future * b_k;

            self.states.tick(state);
            self.histories.tick(history);
            self.futures.tick(window.future);
            record([state, history, window.future]);
        }
        Ok(())
    }

    /// `I(history; future) = H(histories) + H(futures) - H(states)`.
    pub fn active_info(&self, base: LogBase) -> Measure {
        mutual_information(&self.states, &self.histories, &self.futures, base)
    }

    fn local_active_info(&self, [state, history, future]: Events, base: LogBase) -> Measure {
        pointwise_mutual_information(
            &self.states,
            &self.histories,
            &self.futures,
            state,
            history,
            future,
            base,
        )
    }
}

/// Validate and accumulate a flat ensemble. `Ok(Err(_))` is an undefined estimate.
fn accumulate_ensemble<E: StateEncoder>(
    series: &[u64],
    num_realizations: usize,
    steps: usize,
    base: u64,
    k: usize,
    encoder: &E,
    mut record: impl FnMut(Events),
) -> Result<std::result::Result<ActiveInfoDistributions, Undefined>> {
    if let Some(reason) = check_dimensions(&[series], num_realizations, steps, base, k)? {
        return Ok(Err(reason));
    }
    let mut dists = ActiveInfoDistributions::new(base, k)?;
    for realization in series.chunks_exact(steps) {
        if let Err(reason) = dists.accumulate(realization, encoder, &mut record) {
            return Ok(Err(reason));
        }
    }
    Ok(Ok(dists))
}

/// Active information of a single time series, measured in base `base`.
pub fn active_info(series: &[u64], base: u64, k: usize) -> Result<Measure> {
    active_info_ensemble(series, 1, series.len(), base, k)
}

/// Active information of an ensemble of `num_realizations` series of `steps` states each,
/// stored back to back in `series`.
pub fn active_info_ensemble(
    series: &[u64],
    num_realizations: usize,
    steps: usize,
    base: u64,
    k: usize,
) -> Result<Measure> {
    let dists = accumulate_ensemble(series, num_realizations, steps, base, k, &BaseEncoder, |_| {})?;
    match dists {
        Ok(dists) => Ok(dists.active_info(LogBase::try_from(base)?)),
        Err(reason) => Ok(Measure::Undefined(reason)),
    }
}

/// Active information estimator that keeps every window for local values.
///
/// The value is measured in base `b` (the alphabet size) unless another base
/// is chosen with [`ActiveInformation::with_log_base`].
pub struct ActiveInformation {
    observed: std::result::Result<(ActiveInfoDistributions, Vec<Events>), Undefined>,
    log_base: LogBase,
}

impl ActiveInformation {
    /// Estimator over a single realization.
    pub fn new(series: &Array1<u64>, base: u64, k: usize) -> Result<Self> {
        let series = series.to_vec();
        Self::from_slice(&series, 1, series.len(), base, k)
    }

    /// Estimator over an ensemble, one realization per row.
    pub fn new_ensemble(series: &Array2<u64>, base: u64, k: usize) -> Result<Self> {
        let (rows, cols) = series.dim();
        let flat: Vec<u64> = series.iter().copied().collect();
        Self::from_slice(&flat, rows, cols, base, k)
    }

    /// Estimator over a flat ensemble.
    pub fn from_slice(
        series: &[u64],
        num_realizations: usize,
        steps: usize,
        base: u64,
        k: usize,
    ) -> Result<Self> {
        Self::from_slice_with(series, num_realizations, steps, base, k, &BaseEncoder)
    }

    /// Estimator over a flat ensemble, encoding histories with `encoder`.
    pub fn from_slice_with<E: StateEncoder>(
        series: &[u64],
        num_realizations: usize,
        steps: usize,
        base: u64,
        k: usize,
        encoder: &E,
    ) -> Result<Self> {
        let mut events = Vec::new();
        let observed = accumulate_ensemble(
            series,
            num_realizations,
            steps,
            base,
            k,
            encoder,
            |e| events.push(e),
        )?;
        let log_base = LogBase::try_from(base)?;
        Ok(Self {
            observed: observed.map(|dists| (dists, events)),
            log_base,
        })
    }

    pub fn with_log_base(mut self, base: LogBase) -> Self {
        self.log_base = base;
        self
    }

    /// The accumulated distributions, unless the estimate is undefined.
    pub fn distributions(&self) -> Option<&ActiveInfoDistributions> {
        self.observed.as_ref().ok().map(|(dists, _)| dists)
    }
}

impl GlobalValue for ActiveInformation {
    fn global_value(&self) -> Measure {
        match &self.observed {
            Ok((dists, _)) => dists.active_info(self.log_base),
            Err(reason) => Measure::Undefined(*reason),
        }
    }
}

impl LocalValues for ActiveInformation {
    fn local_values(&self) -> std::result::Result<Array1<f64>, Undefined> {
        let (dists, events) = self.observed.as_ref().map_err(|r| *r)?;
        events
            .iter()
            .map(|&e| dists.local_active_info(e, self.log_base).into_result())
            .collect()
    }
}
