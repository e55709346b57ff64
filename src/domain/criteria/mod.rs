//! Criteria module - Static metadata describing what alternatives are scored on.
//!
//! A registry is built once per deployment and only read afterwards. The
//! default hosting registry is available as [`HOSTING_CRITERIA`].

mod registry;

pub use registry::{CriteriaRegistry, Criterion, HOSTING_CRITERIA};
