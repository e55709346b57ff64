//! Dataset configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use crate::adapters::DatasetFormat;

/// Dataset configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// JSON or YAML dataset file; the built-in sample is used when unset
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    /// Get the dataset path, if one is configured
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if DatasetFormat::from_path(path).is_none() {
                return Err(ValidationError::UnsupportedDatasetFormat(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
