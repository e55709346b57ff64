//! File-based Dataset Source Adapter
//!
//! Reads a dataset from a JSON or YAML file, chosen by extension.
//!
//! ```yaml
//! criteria:            # optional, defaults to the hosting criteria
//!   - { id: C1, name: Price, polarity: cost, default_weight: 0.3 }
//! alternatives:
//!   - id: A1           # optional, defaults to the positional label
//!     name: Budget Host
//!     C1: 500000
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::analysis::{AlternativeRow, DecisionMatrix, RawValue};
use crate::domain::criteria::{CriteriaRegistry, HOSTING_CRITERIA};
use crate::ports::{Dataset, DatasetError, DatasetSource};

/// On-disk shape of a dataset.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    criteria: Option<CriteriaRegistry>,
    alternatives: Vec<AlternativeRecord>,
}

#[derive(Debug, Deserialize)]
struct AlternativeRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(flatten)]
    values: HashMap<String, RawValue>,
}

impl DatasetFile {
    fn into_dataset(self) -> Dataset {
        let rows = self
            .alternatives
            .into_iter()
            .enumerate()
            .map(|(index, record)| AlternativeRow {
                id: record
                    .id
                    .unwrap_or_else(|| DecisionMatrix::positional_label(index)),
                name: record.name,
                values: record.values,
            })
            .collect();

        Dataset {
            registry: self.criteria.unwrap_or_else(|| HOSTING_CRITERIA.clone()),
            matrix: DecisionMatrix::new(rows),
        }
    }
}

/// Supported file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(DatasetFormat::Json),
            "yaml" | "yml" => Some(DatasetFormat::Yaml),
            _ => None,
        }
    }
}

/// Dataset stored in a single file.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileDatasetSource::new("./data/hosting.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str, format: DatasetFormat) -> Result<DatasetFile, DatasetError> {
        match format {
            DatasetFormat::Json => serde_json::from_str(content)
                .map_err(|e| DatasetError::DeserializationFailed(e.to_string())),
            DatasetFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| DatasetError::DeserializationFailed(e.to_string())),
        }
    }
}

impl DatasetSource for FileDatasetSource {
    fn load(&self) -> Result<Dataset, DatasetError> {
        let format = DatasetFormat::from_path(&self.path)
            .ok_or_else(|| DatasetError::UnsupportedFormat(self.path.display().to_string()))?;

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DatasetError::NotFound(self.path.clone()),
            _ => DatasetError::IoError(e.to_string()),
        })?;

        Ok(self.parse(&content, format)?.into_dataset())
    }
}
