// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mutual and conditional information over joint/marginal distributions.
//!
//! The joint and marginal distributions passed to one call must be built with
//! the same encoding, so that each joint event projects onto the marginal
//! events given alongside it. Every distribution of a call is measured with
//! the same [`LogBase`].

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use crate::estimators::approaches::discrete::distribution::Distribution;
use crate::estimators::entropy::shannon_entropy;
use crate::estimators::log_base::LogBase;
use crate::estimators::measure::{Measure, Undefined};

fn all_valid(dists: &[&Distribution]) -> bool {
    dists.iter().all(|d| d.is_valid())
}

/// Pointwise mutual information `log_b p(x,y) / (p(x) p(y))` of one joint event.
pub fn pointwise_mutual_information(
    joint: &Distribution,
    marginal_x: &Distribution,
    marginal_y: &Distribution,
    event_joint: u64,
    event_x: u64,
    event_y: u64,
    base: LogBase,
) -> Measure {
    if !all_valid(&[joint, marginal_x, marginal_y]) {
        return Measure::Undefined(Undefined::InvalidDistribution);
    }
    let ratio = joint.prob(event_joint) / (marginal_x.prob(event_x) * marginal_y.prob(event_y));
    Measure::from(base.log(ratio))
}

/// Mutual information `I(X;Y) = H(X) + H(Y) - H(X,Y)`.
pub fn mutual_information(
    joint: &Distribution,
    marginal_x: &Distribution,
    marginal_y: &Distribution,
    base: LogBase,
) -> Measure {
    shannon_entropy(marginal_x, base) + shannon_entropy(marginal_y, base)
        - shannon_entropy(joint, base)
}

/// Pointwise conditional entropy `-log_b p(x,y) / p(y)` of one joint event.
pub fn pointwise_conditional_entropy(
    joint: &Distribution,
    marginal: &Distribution,
    event_joint: u64,
    event_marginal: u64,
    base: LogBase,
) -> Measure {
    if !all_valid(&[joint, marginal]) {
        return Measure::Undefined(Undefined::InvalidDistribution);
    }
    Measure::from(-base.log(joint.prob(event_joint) / marginal.prob(event_marginal)))
}

/// Conditional entropy `H(X|Y) = H(X,Y) - H(Y)`.
pub fn conditional_entropy(joint: &Distribution, marginal: &Distribution, base: LogBase) -> Measure {
    shannon_entropy(joint, base) - shannon_entropy(marginal, base)
}

/// Pointwise conditional mutual information
/// `log_b p(x,y,z) p(z) / (p(x,z) p(y,z))` of one joint event.
#[allow(clippy::too_many_arguments)]
pub fn pointwise_conditional_mutual_information(
    joint: &Distribution,
    marginal_xz: &Distribution,
    marginal_yz: &Distribution,
    marginal_z: &Distribution,
    event_joint: u64,
    event_xz: u64,
    event_yz: u64,
    event_z: u64,
    base: LogBase,
) -> Measure {
    if !all_valid(&[joint, marginal_xz, marginal_yz, marginal_z]) {
        return Measure::Undefined(Undefined::InvalidDistribution);
    }
    let ratio = (joint.prob(event_joint) * marginal_z.prob(event_z))
        / (marginal_xz.prob(event_xz) * marginal_yz.prob(event_yz));
    Measure::from(base.log(ratio))
}

/// Conditional mutual information `I(X;Y|Z) = H(X,Z) + H(Y,Z) - H(X,Y,Z) - H(Z)`.
pub fn conditional_mutual_information(
    joint: &Distribution,
    marginal_xz: &Distribution,
    marginal_yz: &Distribution,
    marginal_z: &Distribution,
    base: LogBase,
) -> Measure {
    shannon_entropy(marginal_xz, base) + shannon_entropy(marginal_yz, base)
        - shannon_entropy(joint, base)
        - shannon_entropy(marginal_z, base)
}

pub struct MutualInformation;

impl MutualInformation {
    /// Create a plug-in mutual information estimator for two aligned symbol series.
    pub fn new_discrete(x: &Array1<u64>, y: &Array1<u64>) -> Result<DiscreteMutualInformation> {
        DiscreteMutualInformation::new(x, y)
    }
}
