//! Training configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`CloudClassifier`](crate::CloudClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Radius assigned to every newly spawned data cloud.
    ///
    /// Directly controls spawn sensitivity: a sample merges into its nearest
    /// cloud only while its halved squared distance stays within the cloud's
    /// radius, so a smaller value produces more, tighter clouds.
    pub initial_radius: f64,
}

impl CloudConfig {
    /// Default initial radius, `1 − cos(π/6)`.
    ///
    /// On the unit hypersphere this admits samples within 30 degrees of a
    /// fresh cloud's center.
    pub fn default_initial_radius() -> f64 {
        1.0 - std::f64::consts::FRAC_PI_6.cos()
    }

    /// Config with a custom initial radius.
    pub fn with_initial_radius(initial_radius: f64) -> Self {
        Self { initial_radius }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            initial_radius: Self::default_initial_radius(),
        }
    }
}
