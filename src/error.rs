// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operational failures.
//!
//! These are reported when a call itself cannot be carried out (bad argument,
//! failed allocation, mismatched buffer). A quantity that is merely undefined
//! for the given data is not an error; see [`crate::Measure`].

use thiserror::Error;

/// Status classification for calls that fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InformError {
    /// A distribution was requested with a support of zero events.
    #[error("distribution support must contain at least one event")]
    EmptySupport,

    /// The histogram could not be allocated.
    #[error("failed to allocate a histogram of {size} events")]
    Alloc { size: usize },

    /// `base^exponent` does not fit into the address space.
    #[error("support of {base}^{exponent} events overflows")]
    SupportOverflow { base: u64, exponent: usize },

    /// The alphabet needs at least two states.
    #[error("invalid base {0}: an alphabet needs at least two states")]
    InvalidBase(u64),

    /// Logarithm base is non-finite, non-positive or one.
    #[error("invalid logarithm base {0}")]
    InvalidLogBase(f64),

    /// History length of zero.
    #[error("history length must be positive")]
    ZeroHistory,

    /// A buffer, series or distribution has the wrong length.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// No output buffer was provided.
    #[error("output buffer is missing")]
    MissingBuffer,

    /// The total number of observations does not fit into a `u64`.
    #[error("total observation count overflows")]
    CountOverflow,

    /// The distribution has no observations.
    #[error("distribution has no observations")]
    InvalidDistribution,

    /// A state is not a member of the declared alphabet.
    #[error("state {state} is inconsistent with base {base}")]
    BadState { state: u64, base: u64 },
}

impl InformError {
    /// Whether the failure comes from the caller's arguments rather than the allocator.
    pub fn is_argument_error(&self) -> bool {
        !matches!(
            self,
            InformError::Alloc { .. } | InformError::SupportOverflow { .. }
        )
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, InformError>;
