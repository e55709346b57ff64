//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ranking domain.

mod errors;
mod ids;
mod polarity;
mod timestamp;

pub use errors::{AnalysisError, MatrixIssue, ValidationError, WeightsIssue};
pub use ids::SessionId;
pub use polarity::Polarity;
pub use timestamp::Timestamp;
