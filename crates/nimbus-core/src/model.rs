//! The frozen classifier produced by training.

use crate::error::{CloudError, Result};
use crate::store::CloudStore;
use crate::vector::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Class label: positive dense integers starting at 1.
pub type ClassLabel = u32;

/// A trained classifier: one [`CloudStore`] per class label.
///
/// Immutable after training. Classification is read-only, so a model can be
/// shared across threads and queried concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    classes: BTreeMap<ClassLabel, CloudStore>,
}

impl Model {
    pub(crate) fn new(classes: BTreeMap<ClassLabel, CloudStore>) -> Self {
        Self { classes }
    }

    /// Trained class labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = ClassLabel> + '_ {
        self.classes.keys().copied()
    }

    /// Number of trained classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// The cloud store of one class, if trained.
    pub fn store(&self, label: ClassLabel) -> Option<&CloudStore> {
        self.classes.get(&label)
    }

    /// Classify a raw query vector by nearest-cloud distance across classes.
    ///
    /// The query is unit-normalized first. Ties between classes go to the
    /// lowest label. Errors: [`CloudError::UntrainedModel`] when no class was
    /// trained, [`CloudError::ZeroNorm`] and
    /// [`CloudError::DimensionMismatch`] for malformed queries.
    pub fn classify(&self, query: &[f64]) -> Result<ClassLabel> {
        if self.classes.is_empty() {
            return Err(CloudError::UntrainedModel);
        }
        let query = normalize(query)?;

        let mut best: Option<(ClassLabel, f64)> = None;
        for (&label, store) in &self.classes {
            let dist = store.nearest_distance(&query)?;
            match best {
                // Strict comparison keeps the lowest label on exact ties.
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((label, dist)),
            }
        }
        // classes is non-empty, so best is always set by the loop.
        let (label, _) = best.ok_or(CloudError::UntrainedModel)?;
        Ok(label)
    }

    /// Classify a batch of queries, preserving input order.
    ///
    /// Each element is classified independently; the first malformed query
    /// aborts the batch.
    pub fn classify_batch(&self, queries: &[Vec<f64>]) -> Result<Vec<ClassLabel>> {
        queries.iter().map(|q| self.classify(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::DataCloud;

    fn single_cloud_store(center: &[f64]) -> CloudStore {
        let mut store = CloudStore::new(center.len());
        store.push(DataCloud::new(center.to_vec(), 0.134));
        store
    }

    fn two_class_model() -> Model {
        let mut classes = BTreeMap::new();
        classes.insert(1, single_cloud_store(&[1.0, 0.0]));
        classes.insert(2, single_cloud_store(&[0.0, 1.0]));
        Model::new(classes)
    }

    #[test]
    fn classify_picks_nearest_class() {
        let model = two_class_model();
        assert_eq!(model.classify(&[0.9, 0.1]).unwrap(), 1);
        assert_eq!(model.classify(&[0.1, 0.9]).unwrap(), 2);
    }

    #[test]
    fn classify_is_deterministic_across_calls() {
        let model = two_class_model();
        let first = model.classify(&[0.7, 0.3]).unwrap();
        for _ in 0..10 {
            assert_eq!(model.classify(&[0.7, 0.3]).unwrap(), first);
        }
    }

    #[test]
    fn classify_ties_go_to_lowest_label() {
        let model = two_class_model();
        // Equidistant from both unit centers after normalization.
        assert_eq!(model.classify(&[1.0, 1.0]).unwrap(), 1);
    }

    #[test]
    fn classify_untrained_model_is_an_error() {
        let model = Model::new(BTreeMap::new());
        assert_eq!(model.classify(&[1.0, 0.0]), Err(CloudError::UntrainedModel));
    }

    #[test]
    fn classify_batch_preserves_order() {
        let model = two_class_model();
        let queries = vec![vec![0.9, 0.1], vec![0.1, 0.9], vec![0.8, 0.2]];
        assert_eq!(model.classify_batch(&queries).unwrap(), vec![1, 2, 1]);
    }

    #[test]
    fn classify_rejects_zero_query() {
        let model = two_class_model();
        assert_eq!(model.classify(&[0.0, 0.0]), Err(CloudError::ZeroNorm));
    }
}
