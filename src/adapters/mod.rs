//! Adapters - Implementations of port interfaces.
//!
//! - `dataset` - File-backed and built-in dataset sources

pub mod dataset;

pub use dataset::{DatasetFormat, FileDatasetSource, SampleDatasetSource};
