// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # inform
//!
//! Discrete information-theoretic measures on histograms and on time series
//! of integer states: Shannon entropy and its relatives, active information
//! and transfer entropy, including ensemble estimates.
//!
//! ## Quick Start
//!
//! ```rust
//! use inform::estimators::active_information::active_info;
//! use inform::estimators::transfer_entropy::transfer_entropy;
//!
//! let series = [0, 0, 1, 1, 0, 0, 1, 1, 0];
//! let ai = active_info(&series, 2, 2).unwrap();
//! assert!(ai.is_defined());
//!
//! let source = [0, 1, 1, 0, 1, 0, 0, 1];
//! let target = [0, 0, 1, 1, 0, 1, 0, 0];
//! let te = transfer_entropy(&source, &target, 2, 1).unwrap();
//! println!("TE(source -> target) = {te} bits");
//! ```
//!
//! ## Measures
//!
//! | Measure | Histogram | Time series | Ensemble | Local values |
//! |---------|-----------|-------------|----------|--------------|
//! | Entropy | ✅ | | | ✅ |
//! | Mutual Information | ✅ | | | ✅ |
//! | Conditional Entropy / MI | ✅ | | | ✅ |
//! | Active Information | | ✅ | ✅ | ✅ |
//! | Transfer Entropy | | ✅ | ✅ | ✅ |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: free functions (`active_info`, `transfer_entropy`, ...)
//!    and estimator types implementing [`GlobalValue`] and [`LocalValues`]
//! 2. **Measures**: Shannon functionals over [`Distribution`]s
//! 3. **Core Infrastructure**: the histogram, state encoding and series slicing
//!
//! ## Errors and undefined values
//!
//! Operational failures (bad arguments, allocation, overflow of the state
//! space) are reported as [`InformError`]. A measure that is mathematically
//! undefined for the given data, such as the entropy of an empty histogram,
//! is a [`Measure::Undefined`] carrying the reason. The library does not log.

pub mod error;
pub mod estimators;

pub use error::{InformError, Result};
pub use estimators::approaches::discrete::distribution::Distribution;
pub use estimators::active_information::{active_info, active_info_ensemble};
pub use estimators::log_base::LogBase;
pub use estimators::measure::{Measure, Undefined};
pub use estimators::traits::{GlobalValue, LocalValues};
pub use estimators::transfer_entropy::{transfer_entropy, transfer_entropy_ensemble};
