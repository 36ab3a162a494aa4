//! # Nimbus Core
//!
//! Online evolving data-cloud classifier built from single-pass running
//! statistics.
//!
//! Training ingests a stream of labeled feature vectors per class and grows a
//! small set of cluster prototypes ("data clouds") for that class. Each cloud
//! keeps only a running center, a support count, and an influence radius — no
//! raw sample is ever retained. A sample either merges into its nearest cloud
//! or, when the novelty tests fire, spawns a fresh one. Testing classifies a
//! query by nearest-cloud distance across all classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use nimbus_core::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let mut streams: BTreeMap<ClassLabel, Vec<Vec<f64>>> = BTreeMap::new();
//! streams.insert(1, vec![vec![1.0, 0.0], vec![0.99, 0.14]]);
//! streams.insert(2, vec![vec![0.0, 1.0], vec![-0.01, 0.9999]]);
//!
//! let classifier = CloudClassifier::new(CloudConfig::default());
//! let model = classifier.train(&streams).unwrap();
//!
//! assert_eq!(model.classify(&[1.0, 0.0]).unwrap(), 1);
//! assert_eq!(model.classify(&[0.0, 1.0]).unwrap(), 2);
//! ```

pub mod cloud;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod store;
pub mod train;
pub mod vector;
pub mod prelude;

pub use cloud::DataCloud;
pub use config::CloudConfig;
pub use error::{CloudError, Result};
pub use model::{ClassLabel, Model};
pub use stats::GlobalStats;
pub use store::CloudStore;
pub use train::CloudClassifier;
