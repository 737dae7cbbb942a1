//! Escape-time statistics gathered while rendering.

use fnv::FnvHashMap;

/// Histogram of escape-time results, split into interior pixels (budget
/// exhausted) and per-count buckets for escaped pixels.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Histogram {
    pub interior: usize,
    pub escaped: usize,
    buckets: FnvHashMap<u32, u32>,
}

impl Histogram {
    pub fn record(&mut self, iterations: u32, max_iterations: u32) {
        if iterations == max_iterations {
            self.interior += 1;
        } else {
            self.escaped += 1;
            *self.buckets.entry(iterations).or_insert(0) += 1;
        }
    }

    /// Combine two partial histograms, e.g. from different rows.
    pub fn merge(mut self, other: Self) -> Self {
        self.interior += other.interior;
        self.escaped += other.escaped;
        for (iterations, count) in other.buckets {
            *self.buckets.entry(iterations).or_insert(0) += count;
        }
        self
    }

    pub fn total(&self) -> usize {
        self.interior + self.escaped
    }

    pub fn distinct_escape_counts(&self) -> usize {
        self.buckets.len()
    }

    /// Smallest and largest escape count among escaped pixels.
    pub fn escape_range(&self) -> Option<(u32, u32)> {
        let min = self.buckets.keys().min()?;
        let max = self.buckets.keys().max()?;
        Some((*min, *max))
    }

    pub fn count(&self, iterations: u32) -> u32 {
        self.buckets.get(&iterations).copied().unwrap_or(0)
    }
}
