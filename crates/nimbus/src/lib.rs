//! # Nimbus
//!
//! Online evolving data-cloud classifier built from single-pass running
//! statistics.
//!
//! Training ingests labeled feature vectors one at a time and grows a small
//! set of cluster prototypes ("data clouds") per class, keeping only running
//! statistics — no raw sample is retained. Classification finds the nearest
//! cloud across all classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use nimbus::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let mut streams: BTreeMap<ClassLabel, Vec<Vec<f64>>> = BTreeMap::new();
//! streams.insert(1, vec![vec![1.0, 0.0], vec![0.99, 0.14]]);
//! streams.insert(2, vec![vec![0.0, 1.0], vec![-0.01, 0.9999]]);
//!
//! let model = CloudClassifier::new(CloudConfig::default())
//!     .train(&streams)
//!     .unwrap();
//! assert_eq!(model.classify(&[1.0, 0.0]).unwrap(), 1);
//! ```
//!
//! ## Crates
//!
//! - [`nimbus_core`] - the training and classification algorithm
//! - [`nimbus_data`] - labeled dataset loading (CSV, JSON)
//! - [`nimbus_eval`] - accuracy and confusion-matrix evaluation

pub use nimbus_core::{
    cloud, config, error, model, stats, store, train, vector, ClassLabel, CloudClassifier,
    CloudConfig, CloudError, CloudStore, DataCloud, GlobalStats, Model, Result,
};

pub use nimbus_data::{DataError, DataResult, Dataset, Sample};

/// Evaluation of predicted against true labels.
pub mod eval {
    pub use nimbus_eval::{ConfusionMatrix, EvalError, EvalResult};
}

/// Convenience re-exports for typical use.
pub mod prelude {
    pub use nimbus_core::prelude::*;
    pub use nimbus_data::{Dataset, Sample};
    pub use nimbus_eval::ConfusionMatrix;
}
