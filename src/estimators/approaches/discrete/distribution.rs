// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::error::{InformError, Result};

/// Empirical distribution over a fixed support `0..size`.
///
/// Counts are exact integers; the total number of observations is maintained
/// incrementally so `counts() == histogram().sum()` always holds.
///
/// Reads and writes outside the support are tolerated: `get` returns 0 and
/// `set`/`tick` return 0 without touching the histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    histogram: Vec<u64>,
    counts: u64,
}

fn zeroed(size: usize) -> Result<Vec<u64>> {
    let mut histogram = Vec::new();
    histogram
        .try_reserve_exact(size)
        .map_err(|_| InformError::Alloc { size })?;
    histogram.resize(size, 0);
    Ok(histogram)
}

impl Distribution {
    /// Create an empty distribution with `size` events.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(InformError::EmptySupport);
        }
        Ok(Self {
            histogram: zeroed(size)?,
            counts: 0,
        })
    }

    /// Create a distribution from a full histogram of initial counts.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        let mut dist = Self::new(counts.len())?;
        dist.counts = counts
            .iter()
            .try_fold(0u64, |total, &c| total.checked_add(c))
            .ok_or(InformError::CountOverflow)?;
        dist.histogram.copy_from_slice(counts);
        Ok(dist)
    }

    /// Histogram a slice of observed events over the support `0..size`.
    pub fn from_data(data: &[u64], size: usize) -> Result<Self> {
        let mut dist = Self::new(size)?;
        for &event in data {
            if dist.tick(event) == 0 {
                return Err(InformError::BadState {
                    state: event,
                    base: size as u64,
                });
            }
        }
        Ok(dist)
    }

    /// Grow or shrink the support.
    ///
    /// Shrinking drops the events beyond the new boundary and recomputes the
    /// total; growing zeroes the new events. A size of zero is ignored. If
    /// the allocation fails the distribution is left unchanged.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        if size == 0 || size == self.histogram.len() {
            return Ok(());
        }
        if size < self.histogram.len() {
            self.histogram.truncate(size);
            self.histogram.shrink_to_fit();
            self.counts = self.histogram.iter().sum();
        } else {
            let extra = size - self.histogram.len();
            self.histogram
                .try_reserve_exact(extra)
                .map_err(|_| InformError::Alloc { size })?;
            self.histogram.resize(size, 0);
        }
        Ok(())
    }

    /// Overwrite `self` with the contents of `src`, resizing first if needed.
    pub fn copy_from(&mut self, src: &Distribution) -> Result<()> {
        if self.histogram.len() != src.histogram.len() {
            self.resize(src.histogram.len())?;
        }
        self.histogram.copy_from_slice(&src.histogram);
        self.counts = src.counts;
        Ok(())
    }

    /// Number of events in the support.
    pub fn size(&self) -> usize {
        self.histogram.len()
    }

    /// Total number of observations.
    pub fn counts(&self) -> u64 {
        self.counts
    }

    /// A distribution is valid once it has at least one observation.
    pub fn is_valid(&self) -> bool {
        !self.histogram.is_empty() && self.counts != 0
    }

    pub fn get(&self, event: u64) -> u64 {
        self.index(event).map_or(0, |i| self.histogram[i])
    }

    /// Set the count of `event`, returning the new count.
    ///
    /// Returns 0 and leaves the histogram untouched if the total would overflow.
    pub fn set(&mut self, event: u64, count: u64) -> u64 {
        let Some(i) = self.index(event) else {
            return 0;
        };
        let Some(total) = (self.counts - self.histogram[i]).checked_add(count) else {
            return 0;
        };
        self.counts = total;
        self.histogram[i] = count;
        count
    }

    /// Record one observation of `event`, returning its new count.
    pub fn tick(&mut self, event: u64) -> u64 {
        let Some(i) = self.index(event) else {
            return 0;
        };
        let Some(total) = self.counts.checked_add(1) else {
            return 0;
        };
        self.counts = total;
        self.histogram[i] += 1;
        self.histogram[i]
    }

    /// Empirical probability of `event`; 0 without observations or outside the support.
    pub fn prob(&self, event: u64) -> f64 {
        if self.counts == 0 {
            return 0.0;
        }
        self.get(event) as f64 / self.counts as f64
    }

    /// Write the probability of every event into `probs`, returning the number written.
    pub fn dump(&self, probs: &mut [f64]) -> Result<usize> {
        if !self.is_valid() {
            return Err(InformError::InvalidDistribution);
        }
        if probs.is_empty() {
            return Err(InformError::MissingBuffer);
        }
        if probs.len() != self.histogram.len() {
            return Err(InformError::LengthMismatch {
                expected: self.histogram.len(),
                got: probs.len(),
            });
        }
        let n = self.counts as f64;
        for (p, &c) in probs.iter_mut().zip(&self.histogram) {
            *p = c as f64 / n;
        }
        Ok(probs.len())
    }

    /// Probabilities of all events.
    pub fn probabilities(&self) -> Result<Array1<f64>> {
        let mut probs = Array1::zeros(self.histogram.len());
        match probs.as_slice_mut() {
            Some(slice) => self.dump(slice)?,
            None => return Err(InformError::MissingBuffer),
        };
        Ok(probs)
    }

    /// Raw counts of every event.
    pub fn histogram(&self) -> ArrayView1<'_, u64> {
        ArrayView1::from(&self.histogram[..])
    }

    /// Add the counts of `other` into `self`. Both supports must match.
    ///
    /// Fails without touching `self` if the total would overflow.
    pub fn merge(&mut self, other: &Distribution) -> Result<()> {
        if other.histogram.len() != self.histogram.len() {
            return Err(InformError::LengthMismatch {
                expected: self.histogram.len(),
                got: other.histogram.len(),
            });
        }
        let total = self
            .counts
            .checked_add(other.counts)
            .ok_or(InformError::CountOverflow)?;
        // every bucket is bounded by its total
        for (c, &o) in self.histogram.iter_mut().zip(&other.histogram) {
            *c += o;
        }
        self.counts = total;
        Ok(())
    }

    /// Iterate over `(event, count)` pairs with a non-zero count.
    pub fn observed(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.histogram
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(e, &c)| (e as u64, c))
    }

    #[inline]
    fn index(&self, event: u64) -> Option<usize> {
        usize::try_from(event)
            .ok()
            .filter(|&i| i < self.histogram.len())
    }
}
