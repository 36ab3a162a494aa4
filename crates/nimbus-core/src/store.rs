//! Per-class collection of data clouds.

use crate::cloud::DataCloud;
use crate::error::{CloudError, Result};
use crate::vector::euclidean_distance;
use serde::{Deserialize, Serialize};

/// Append-only ordered collection of the data clouds of one class.
///
/// Clouds keep their index for the life of the store: they are mutated in
/// place but never removed or reordered, so cloud count is non-decreasing
/// over a training stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStore {
    dimension: usize,
    clouds: Vec<DataCloud>,
}

impl CloudStore {
    /// Empty store for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            clouds: Vec::new(),
        }
    }

    /// Vector dimension every cloud in this store shares.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Append a new cloud. Indices of existing clouds are unaffected.
    pub fn push(&mut self, cloud: DataCloud) {
        debug_assert_eq!(cloud.center.len(), self.dimension);
        self.clouds.push(cloud);
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataCloud> {
        self.clouds.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut DataCloud> {
        self.clouds.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataCloud> {
        self.clouds.iter()
    }

    /// Index and Euclidean distance of the cloud nearest to `query`.
    ///
    /// Linear scan; ties go to the lowest index. Errors on an empty store or
    /// a query of the wrong dimension.
    pub fn nearest(&self, query: &[f64]) -> Result<(usize, f64)> {
        if self.clouds.is_empty() {
            return Err(CloudError::EmptyStore);
        }
        if query.len() != self.dimension {
            return Err(CloudError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut best = (0, euclidean_distance(query, &self.clouds[0].center));
        for (index, cloud) in self.clouds.iter().enumerate().skip(1) {
            let dist = euclidean_distance(query, &cloud.center);
            if dist < best.1 {
                best = (index, dist);
            }
        }
        Ok(best)
    }

    /// Minimum Euclidean distance from `query` to any cloud center.
    pub fn nearest_distance(&self, query: &[f64]) -> Result<f64> {
        self.nearest(query).map(|(_, dist)| dist)
    }
}
