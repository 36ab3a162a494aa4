//! The evolving cluster prototype.

use crate::vector::squared_norm;
use serde::{Deserialize, Serialize};

/// An evolving cluster prototype: a running center, a support count, and an
/// influence radius. No member sample is retained.
///
/// A cloud is born when the novelty tests fire, is mutated in place by every
/// later sample assigned to it, and is never removed or merged with another
/// cloud. The center is a recursive mean of unit-normalized samples, so it is
/// not itself guaranteed to have unit norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCloud {
    /// Running mean of all samples merged into this cloud.
    pub center: Vec<f64>,
    /// Number of samples merged into this cloud, including the founder.
    pub support: u64,
    /// Influence threshold: a sample merges while its halved squared distance
    /// to the center stays within this value.
    pub radius: f64,
    /// Theoretical squared norm of a unit vector, fixed at creation.
    pub reference_square_norm: f64,
}

impl DataCloud {
    /// Found a new cloud on a single normalized sample.
    pub fn new(center: Vec<f64>, initial_radius: f64) -> Self {
        Self {
            center,
            support: 1,
            radius: initial_radius,
            reference_square_norm: 1.0,
        }
    }

    /// Merge a normalized sample into this cloud.
    ///
    /// Recursive one-pass update: the center absorbs the sample as a running
    /// mean, and the radius halves while picking up a correction from the
    /// updated center's squared norm:
    ///
    /// `radius ← radius/2 + (X − ‖center‖²)/4`
    pub fn merge(&mut self, sample: &[f64]) {
        self.support += 1;
        let support = self.support as f64;
        for (c, x) in self.center.iter_mut().zip(sample.iter()) {
            *c = (*c * (support - 1.0) + x) / support;
        }
        self.radius =
            self.radius / 2.0 + (self.reference_square_norm - squared_norm(&self.center)) / 4.0;
    }
}
