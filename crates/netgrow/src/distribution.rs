//! Weighted distribution of per-node target degrees.
//!
//! A [`DegreeDistribution`] maps a neighbour count to a relative weight. Draws
//! go through a [`DegreeSampler`], a cumulative table built once so every draw
//! costs a single uniform number and a binary search.
use std::collections::BTreeMap;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::random::rand01;

/// Relative weights of target degrees (neighbour counts).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreeDistribution {
    weights: BTreeMap<usize, f32>,
}

impl DegreeDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Neighbour table of the classic random road-network generator:
    /// mostly three- and four-way junctions, a few five- and six-way ones.
    pub fn road_like() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(1, 0.0);
        weights.insert(2, 0.0);
        weights.insert(3, 10.0);
        weights.insert(4, 10.0);
        weights.insert(5, 2.0);
        weights.insert(6, 1.0);
        Self { weights }
    }

    /// Insert or overwrite the weight for `count`.
    pub fn add(&mut self, count: usize, weight: f32) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "weight for neighbour count {count} must be finite and >= 0, got {weight}"
            )));
        }
        self.weights.insert(count, weight);
        Ok(())
    }

    /// Build a distribution from `(count, weight)` pairs. Later duplicates win;
    /// the first negative or non-finite weight fails the whole table.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f32)>,
    {
        let mut dist = Self::new();
        for (count, weight) in entries {
            dist.add(count, weight)?;
        }
        Ok(dist)
    }

    /// Builder form of [`DegreeDistribution::add`].
    pub fn with(mut self, count: usize, weight: f32) -> Result<Self> {
        self.add(count, weight)?;
        Ok(self)
    }

    /// Weight recorded for `count`, if any.
    pub fn weight(&self, count: usize) -> Option<f32> {
        self.weights.get(&count).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries in ascending neighbour-count order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.weights.iter().map(|(count, weight)| (*count, *weight))
    }

    pub fn total_weight(&self) -> f32 {
        self.weights.values().sum()
    }

    /// True when at least one entry can be drawn.
    pub fn has_positive_weight(&self) -> bool {
        self.weights.values().any(|w| *w > 0.0)
    }

    /// Build a sampler over the entries with positive weight.
    pub fn sampler(&self) -> Result<DegreeSampler> {
        let mut counts = Vec::with_capacity(self.weights.len());
        let mut cumulative = Vec::with_capacity(self.weights.len());
        let mut total = 0.0f32;
        for (count, weight) in self.iter().filter(|(_, w)| *w > 0.0) {
            total += weight;
            counts.push(count);
            cumulative.push(total);
        }
        if counts.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        Ok(DegreeSampler {
            counts,
            cumulative,
            total,
        })
    }

    /// Draw one neighbour count proportionally to the recorded weights.
    ///
    /// Repeated draws should go through [`DegreeDistribution::sampler`] to
    /// avoid rebuilding the table each time.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Result<usize> {
        Ok(self.sampler()?.sample(rng))
    }
}

/// Cumulative-weight table over the positive entries of a [`DegreeDistribution`].
#[derive(Debug, Clone)]
pub struct DegreeSampler {
    counts: Vec<usize>,
    cumulative: Vec<f32>,
    total: f32,
}

impl DegreeSampler {
    /// Draw one neighbour count using a single uniform number.
    pub fn sample(&self, rng: &mut dyn RngCore) -> usize {
        let roll = rand01(rng) * self.total;
        let idx = self
            .cumulative
            .partition_point(|c| *c <= roll)
            .min(self.counts.len() - 1);
        self.counts[idx]
    }

    /// Largest count that can be drawn.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
