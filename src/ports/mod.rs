//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Loads the criteria registry and decision matrix

mod dataset_source;

pub use dataset_source::{Dataset, DatasetError, DatasetSource};
