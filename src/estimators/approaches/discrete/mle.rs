use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::{compact_codes, rows_as_vec};
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::entropy::{self_information, shannon_entropy};
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Plug-in (maximum likelihood) Shannon entropy of observed symbols.
///
/// Computes H = -Σ p_i log p_i from empirical probabilities p_i = n_i/N, in nats
/// unless another base is chosen with [`DiscreteEntropy::with_log_base`].
/// Symbols are relabeled to compact codes first, so sparse alphabets do not
/// inflate the histogram. Local values are the self-information -log p(x)
/// of each sample.
pub struct DiscreteEntropy {
    codes: Vec<u64>,
    dist: Distribution,
    base: LogBase,
}

impl DiscreteEntropy {
    pub fn new(data: Array1<u64>) -> Result<Self> {
        let (codes, unique) = compact_codes(&data.to_vec());
        let dist = Distribution::from_data(&codes, unique.max(1))?;
        Ok(Self {
            codes,
            dist,
            base: LogBase::NATS,
        })
    }

    /// Build a vector of DiscreteEntropy estimators, one per row of a 2D array.
    pub fn from_rows(data: Array2<u64>) -> Result<Vec<Self>> {
        rows_as_vec(data).into_iter().map(Self::new).collect()
    }

    pub fn with_log_base(mut self, base: LogBase) -> Self {
        self.base = base;
        self
    }

    /// Histogram of the compact symbol codes.
    pub fn distribution(&self) -> &Distribution {
        &self.dist
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> Measure {
        shannon_entropy(&self.dist, self.base)
    }
}

impl LocalValues for DiscreteEntropy {
    fn local_values(&self) -> std::result::Result<Array1<f64>, Undefined> {
        if !self.dist.is_valid() {
            return Err(Undefined::InvalidDistribution);
        }
        Ok(self
            .codes
            .iter()
            .map(|&c| self_information(&self.dist, c, self.base).to_f64())
            .collect())
    }
}
