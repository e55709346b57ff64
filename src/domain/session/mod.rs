//! Session domain module.
//!
//! Explicit, per-caller working state for the ranking pipelines. A session
//! is passed into each run; the engines themselves keep nothing between calls.

mod aggregate;

pub use aggregate::{AnalysisResults, AnalysisSession};
