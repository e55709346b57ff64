//! Dataset adapters.

mod file_dataset_source;
mod sample_dataset_source;

pub use file_dataset_source::{DatasetFormat, FileDatasetSource};
pub use sample_dataset_source::SampleDatasetSource;
