//! Single-pass training over per-class sample streams.

use crate::cloud::DataCloud;
use crate::config::CloudConfig;
use crate::error::{CloudError, Result};
use crate::model::{ClassLabel, Model};
use crate::stats::{global_density, GlobalStats};
use crate::store::CloudStore;
use crate::vector::normalize;
use std::collections::BTreeMap;

/// Builds a [`Model`] from per-class sample streams in a single pass.
///
/// Every class is trained independently with its own [`GlobalStats`] and
/// [`CloudStore`]; within a class the stream order is significant, since each
/// step's spawn-or-merge decision depends on the statistics left by all prior
/// samples of that class.
#[derive(Debug, Clone, Default)]
pub struct CloudClassifier {
    config: CloudConfig,
}

impl CloudClassifier {
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Train one cloud store per class, in ascending label order.
    ///
    /// Each class's samples are processed strictly in the given order. A
    /// malformed sample aborts training of its class rather than being
    /// skipped, so the running statistics never desynchronize from the
    /// caller's stream.
    pub fn train(
        &self,
        samples_by_class: &BTreeMap<ClassLabel, Vec<Vec<f64>>>,
    ) -> Result<Model> {
        let mut classes = BTreeMap::new();
        for (&label, samples) in samples_by_class {
            let store = self.train_class(label, samples)?;
            log::info!(
                "class {}: {} samples -> {} clouds",
                label,
                samples.len(),
                store.len()
            );
            classes.insert(label, store);
        }
        Ok(Model::new(classes))
    }

    /// Run the full spawn-or-merge loop over one class's stream.
    fn train_class(&self, label: ClassLabel, samples: &[Vec<f64>]) -> Result<CloudStore> {
        let mut stream = samples.iter();
        let first = stream.next().ok_or(CloudError::EmptyClass(label))?;
        let first = normalize(first)?;
        let dimension = first.len();

        // The first sample unconditionally seeds both the global statistics
        // and the first cloud.
        let mut stats = GlobalStats::seed(first.clone());
        let mut store = CloudStore::new(dimension);
        store.push(DataCloud::new(first, self.config.initial_radius));

        for raw in stream {
            if raw.len() != dimension {
                return Err(CloudError::DimensionMismatch {
                    expected: dimension,
                    actual: raw.len(),
                });
            }
            let sample = normalize(raw)?;
            stats.update(&sample);
            self.absorb(&stats, &mut store, sample)?;
        }
        Ok(store)
    }

    /// Decide whether `sample` spawns a new cloud or merges into an existing
    /// one, and apply the outcome.
    ///
    /// Stage A: the sample's global density against the extremes over all
    /// cloud centers — an extremal point is novel regardless of local
    /// distance. Stage B: halved squared distance to the nearest cloud
    /// against that cloud's radius; a score exactly at the radius merges.
    fn absorb(&self, stats: &GlobalStats, store: &mut CloudStore, sample: Vec<f64>) -> Result<()> {
        let delta = stats.delta()?;
        let sample_density = global_density(&sample, stats.mean(), delta);

        let mut max_density = f64::NEG_INFINITY;
        let mut min_density = f64::INFINITY;
        for cloud in store.iter() {
            let density = global_density(&cloud.center, stats.mean(), delta);
            max_density = max_density.max(density);
            min_density = min_density.min(density);
        }

        if sample_density > max_density || sample_density < min_density {
            log::debug!("spawn (global density {:.6})", sample_density);
            store.push(DataCloud::new(sample, self.config.initial_radius));
            return Ok(());
        }

        let (index, dist) = store.nearest(&sample)?;
        let local_score = dist * dist / 2.0;
        let radius = store.get(index).ok_or(CloudError::EmptyStore)?.radius;
        if local_score > radius {
            log::debug!("spawn (local score {:.6} > radius {:.6})", local_score, radius);
            store.push(DataCloud::new(sample, self.config.initial_radius));
        } else {
            log::debug!("merge into cloud {}", index);
            store
                .get_mut(index)
                .ok_or(CloudError::EmptyStore)?
                .merge(&sample);
        }
        Ok(())
    }
}
