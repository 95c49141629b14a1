// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transfer entropy from a source series `Y` into a target series `X`:
//! the information the source's current state carries about the target's
//! next state beyond what the target's own `k`-step history provides.
//!
//! TE(Y -> X) = I(Y_t; X_{t+1} | X^{(k)}_t)
//!            = H(X^{(k)}, Y) + H(X^{(k)}, X_{t+1}) - H(X^{(k)}, X_{t+1}, Y) - H(X^{(k)})
//!
//! With `b` states and history code `h` in `0..b^k`, the four accumulators are
//! indexed as follows:
//!
//! | Distribution | Event                           | Support     |
//! |--------------|---------------------------------|-------------|
//! | `states`     | `h + future*b^k + source*b^(k+1)` | `b^(k+2)` |
//! | `histories`  | `h`                             | `b^k`       |
//! | `sources`    | `h + source*b^k`                | `b^(k+1)`   |
//! | `predicates` | `h + future*b^k`                | `b^(k+1)`   |

use ndarray::{Array1, Array2};

use crate::error::{InformError, Result};
use crate::estimators::approaches::discrete::discrete_utils::support_size;
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};
use crate::estimators::mutual_information::{
    conditional_mutual_information, pointwise_conditional_mutual_information,
};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::series_slicing::{check_dimensions, transfer_windows};
use crate::estimators::utils::state_encoding::{BaseEncoder, StateEncoder, encoding_failure};

/// Observed (state, history, source, predicate) events of one window.
type Events = [u64; 4];

/// Accumulators for transfer entropy with history length `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEntropyDistributions {
    pub states: Distribution,
    pub histories: Distribution,
    pub sources: Distribution,
    pub predicates: Distribution,
    base: u64,
    k: usize,
}

impl TransferEntropyDistributions {
    pub fn new(base: u64, k: usize) -> Result<Self> {
        if base < 2 {
            return Err(InformError::InvalidBase(base));
        }
        if k == 0 {
            return Err(InformError::ZeroHistory);
        }
        let histories = Distribution::new(support_size(base, k)?)?;
        Ok(Self {
            states: Distribution::new(support_size(base, k + 2)?)?,
            histories,
            sources: Distribution::new(support_size(base, k + 1)?)?,
            predicates: Distribution::new(support_size(base, k + 1)?)?,
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

    /// Accumulate every window of one pair of aligned realizations.
    ///
    /// On failure the windows before the offending one stay counted.
    pub fn observe(&mut self, source: &[u64], target: &[u64]) -> std::result::Result<(), Undefined> {
        self.observe_with(source, target, &BaseEncoder)
    }

    /// Like [`observe`](Self::observe), encoding target histories with `encoder`.
    pub fn observe_with<E: StateEncoder>(
        &mut self,
        source: &[u64],
        target: &[u64],
        encoder: &E,
    ) -> std::result::Result<(), Undefined> {
        self.accumulate(source, target, encoder, |_| {})
    }

    fn accumulate<E: StateEncoder>(
        &mut self,
        source: &[u64],
        target: &[u64],
        encoder: &E,
        mut record: impl FnMut(Events),
    ) -> std::result::Result<(), Undefined> {
        let b = self.base;
        let b_k = self.histories.size() as u64;
        let b_k1 = self.sources.size() as u64;
        for window in transfer_windows(source, target, self.k) {
            let history = encoder.encode(window.history, b).map_err(encoding_failure)?;
            if history >= b_k {
                return Err(Undefined::Indeterminate);
            }
            if let Some(&state) = [window.future, window.source].iter().find(|&&s| s >= b) {
                return Err(Undefined::BadState { state, base: b });
            }
            let predicate = history + window.future * b_k;
            let src = history + window.source * b_k;
            let state = predicate + window.source * b_k1;

            self.states.tick(state);
            self.histories.tick(history);
            self.sources.tick(src);
            self.predicates.tick(predicate);
            record([state, history, src, predicate]);
        }
        Ok(())
    }

    /// `H(sources) + H(predicates) - H(states) - H(histories)`.
    pub fn transfer_entropy(&self, base: LogBase) -> Measure {
        conditional_mutual_information(
            &self.states,
            &self.sources,
            &self.predicates,
            &self.histories,
            base,
        )
    }

    fn local_transfer_entropy(&self, [state, history, src, predicate]: Events, base: LogBase) -> Measure {
        pointwise_conditional_mutual_information(
            &self.states,
            &self.sources,
            &self.predicates,
            &self.histories,
            state,
            src,
            predicate,
            history,
            base,
        )
    }
}

/// Validate and accumulate flat ensembles. `Ok(Err(_))` is an undefined estimate.
#[allow(clippy::too_many_arguments)]
fn accumulate_ensemble<E: StateEncoder>(
    source: &[u64],
    target: &[u64],
    num_realizations: usize,
    steps: usize,
    base: u64,
    k: usize,
    encoder: &E,
    mut record: impl FnMut(Events),
) -> Result<std::result::Result<TransferEntropyDistributions, Undefined>> {
    if let Some(reason) = check_dimensions(&[source, target], num_realizations, steps, base, k)? {
        return Ok(Err(reason));
    }
    let mut dists = TransferEntropyDistributions::new(base, k)?;
    for (src, tgt) in source.chunks_exact(steps).zip(target.chunks_exact(steps)) {
        if let Err(reason) = dists.accumulate(src, tgt, encoder, &mut record) {
            return Ok(Err(reason));
        }
    }
    Ok(Ok(dists))
}

/// Transfer entropy from `source` into `target`, measured in base `base`.
pub fn transfer_entropy(source: &[u64], target: &[u64], base: u64, k: usize) -> Result<Measure> {
    transfer_entropy_ensemble(source, target, 1, target.len(), base, k)
}

/// Transfer entropy over an ensemble of `num_realizations` pairs of series of `steps` states.
pub fn transfer_entropy_ensemble(
    source: &[u64],
    target: &[u64],
    num_realizations: usize,
    steps: usize,
    base: u64,
    k: usize,
) -> Result<Measure> {
    let dists = accumulate_ensemble(
        source,
        target,
        num_realizations,
        steps,
        base,
        k,
        &BaseEncoder,
        |_| {},
    )?;
    match dists {
        Ok(dists) => Ok(dists.transfer_entropy(LogBase::try_from(base)?)),
        Err(reason) => Ok(Measure::Undefined(reason)),
    }
}

/// Transfer entropy estimator that keeps every window for local values.
///
/// The value is measured in base `b` (the alphabet size) unless another base
/// is chosen with [`TransferEntropy::with_log_base`].
pub struct TransferEntropy {
    observed: std::result::Result<(TransferEntropyDistributions, Vec<Events>), Undefined>,
    log_base: LogBase,
}

impl TransferEntropy {
    /// Estimator over a single pair of realizations.
    pub fn new(source: &Array1<u64>, target: &Array1<u64>, base: u64, k: usize) -> Result<Self> {
        let (source, target) = (source.to_vec(), target.to_vec());
        Self::from_slice(&source, &target, 1, target.len(), base, k)
    }

    /// Estimator over ensembles, one realization per row.
    ///
    /// Both arrays must have the same shape.
    pub fn new_ensemble(
        source: &Array2<u64>,
        target: &Array2<u64>,
        base: u64,
        k: usize,
    ) -> Result<Self> {
        let (rows, cols) = target.dim();
        let (source_rows, source_cols) = source.dim();
        // realizations must line up, not just the element count
        if source.len() == target.len() && source_cols != cols {
            return Err(InformError::LengthMismatch {
                expected: cols,
                got: source_cols,
            });
        }
        if source.len() == target.len() && source_rows != rows {
            return Err(InformError::LengthMismatch {
                expected: rows,
                got: source_rows,
            });
        }
        let source: Vec<u64> = source.iter().copied().collect();
        let target: Vec<u64> = target.iter().copied().collect();
        Self::from_slice(&source, &target, rows, cols, base, k)
    }

    /// Estimator over flat ensembles.
    pub fn from_slice(
        source: &[u64],
        target: &[u64],
        num_realizations: usize,
        steps: usize,
        base: u64,
        k: usize,
    ) -> Result<Self> {
        Self::from_slice_with(source, target, num_realizations, steps, base, k, &BaseEncoder)
    }

    /// Estimator over flat ensembles, encoding target histories with `encoder`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_slice_with<E: StateEncoder>(
        source: &[u64],
        target: &[u64],
        num_realizations: usize,
        steps: usize,
        base: u64,
        k: usize,
        encoder: &E,
    ) -> Result<Self> {
        let mut events = Vec::new();
        let observed = accumulate_ensemble(
            source,
            target,
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
    pub fn distributions(&self) -> Option<&TransferEntropyDistributions> {
        self.observed.as_ref().ok().map(|(dists, _)| dists)
    }
}

impl GlobalValue for TransferEntropy {
    fn global_value(&self) -> Measure {
        match &self.observed {
            Ok((dists, _)) => dists.transfer_entropy(self.log_base),
            Err(reason) => Measure::Undefined(*reason),
        }
    }
}

impl LocalValues for TransferEntropy {
    fn local_values(&self) -> std::result::Result<Array1<f64>, Undefined> {
        let (dists, events) = self.observed.as_ref().map_err(|r| *r)?;
        events
            .iter()
            .map(|&e| dists.local_transfer_entropy(e, self.log_base).into_result())
            .collect()
    }
}
