//! Per-class running statistics over the training stream.

use crate::error::{CloudError, Result};
use crate::vector::{squared_distance, squared_norm};

/// Running global statistics for one class's sample stream.
///
/// Seeded by the first normalized sample and updated recursively by every
/// later one; no sample history is kept. Every input is unit-normalized, so
/// the reference squared norm is the constant 1.0 rather than a statistic
/// recomputed from data.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStats {
    /// Time index: number of samples seen so far.
    k: u64,
    /// Recursive mean of all normalized samples.
    mean: Vec<f64>,
    /// Reference squared norm of a unit vector.
    reference_square_norm: f64,
}

impl GlobalStats {
    /// Seed the statistics from the first normalized sample of a stream.
    pub fn seed(first: Vec<f64>) -> Self {
        Self {
            k: 1,
            mean: first,
            reference_square_norm: 1.0,
        }
    }

    /// Fold one normalized sample into the running mean.
    pub fn update(&mut self, sample: &[f64]) {
        self.k += 1;
        let k = self.k as f64;
        for (m, x) in self.mean.iter_mut().zip(sample.iter()) {
            *m = (*m * (k - 1.0) + x) / k;
        }
    }

    /// Samples seen so far.
    pub fn count(&self) -> u64 {
        self.k
    }

    /// The running global mean.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Global variance proxy: `reference − ‖mean‖²`.
    ///
    /// Must be strictly positive for the density formula to be defined;
    /// otherwise fails with [`CloudError::DegenerateStatistics`].
    pub fn delta(&self) -> Result<f64> {
        let delta = self.reference_square_norm - squared_norm(&self.mean);
        if delta <= 0.0 {
            return Err(CloudError::DegenerateStatistics(delta));
        }
        Ok(delta)
    }
}

/// Global density of `point` relative to the running mean.
///
/// `1 / (1 + ‖point − mean‖² / delta)`, in `(0, 1]`.
pub fn global_density(point: &[f64], mean: &[f64], delta: f64) -> f64 {
    1.0 / (1.0 + squared_distance(point, mean) / delta)
}
