//! Vector arithmetic shared by training and testing.

use crate::error::{CloudError, Result};

/// Scale a vector to unit Euclidean length.
///
/// Fails with [`CloudError::ZeroNorm`] for the zero vector, which has no
/// direction to preserve.
pub fn normalize(v: &[f64]) -> Result<Vec<f64>> {
    let norm = squared_norm(v).sqrt();
    if norm == 0.0 {
        return Err(CloudError::ZeroNorm);
    }
    Ok(v.iter().map(|x| x / norm).collect())
}

/// Squared Euclidean norm, `‖v‖²`.
pub fn squared_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Euclidean distance between two vectors of equal dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two vectors of equal dimension.
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
