//! Dataset Source Port - Where the initial criteria and alternatives come from.
//!
//! The scoring pipelines only ever see an in-memory [`Dataset`]. How it was
//! obtained (a file, a built-in sample, a form) is an adapter concern.

use std::path::PathBuf;

use crate::domain::analysis::DecisionMatrix;
use crate::domain::criteria::CriteriaRegistry;

/// Criteria plus the alternatives scored against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub registry: CriteriaRegistry,
    pub matrix: DecisionMatrix,
}

/// Errors that can occur while loading a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to deserialize dataset: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

/// Port for loading a dataset.
///
/// Implementations return a fresh value on every call; callers own it.
pub trait DatasetSource: Send + Sync {
    /// Load the dataset.
    ///
    /// # Errors
    /// Returns `DatasetError` if the source cannot be read or parsed
    fn load(&self) -> Result<Dataset, DatasetError>;
}
