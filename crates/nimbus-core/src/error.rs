//! Error types for cloud training and classification.

use crate::model::ClassLabel;
use thiserror::Error;

/// Errors that can occur during training or classification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CloudError {
    /// A zero vector cannot be normalized to unit length.
    #[error("cannot normalize a zero vector")]
    ZeroNorm,

    /// A sample's dimensionality disagrees with the established dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A class was declared with no samples.
    #[error("empty sample stream for class {0}")]
    EmptyClass(ClassLabel),

    /// The global variance proxy collapsed to zero or below, leaving the
    /// density formula undefined.
    #[error("degenerate global statistics: delta = {0}")]
    DegenerateStatistics(f64),

    /// Classification was attempted against a model with no trained classes.
    #[error("model has no trained classes")]
    UntrainedModel,

    /// A nearest-cloud query was made against an empty store.
    #[error("data cloud store is empty")]
    EmptyStore,
}

/// Result type for cloud operations.
pub type Result<T> = std::result::Result<T, CloudError>;
