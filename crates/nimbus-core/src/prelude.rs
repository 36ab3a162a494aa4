//! Convenience re-exports for typical use.
//!
//! ```rust
//! use nimbus_core::prelude::*;
//! ```

pub use crate::cloud::DataCloud;
pub use crate::config::CloudConfig;
pub use crate::error::{CloudError, Result};
pub use crate::model::{ClassLabel, Model};
pub use crate::store::CloudStore;
pub use crate::train::CloudClassifier;
