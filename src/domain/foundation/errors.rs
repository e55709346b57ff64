//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite, non-negative number, got {actual}")]
    NegativeOrNonFinite { field: String, actual: f64 },

    #[error("Duplicate {kind} '{id}'")]
    Duplicate { kind: &'static str, id: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a validation error for a number that must be finite and non-negative.
    pub fn negative_or_non_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NegativeOrNonFinite {
            field: field.into(),
            actual,
        }
    }

    /// Creates a duplicate identifier validation error.
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            kind,
            id: id.into(),
        }
    }
}

/// Why a weight mapping could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightsIssue {
    /// Weights sum to zero, so no scaling exists.
    ZeroSum,
    Negative { criterion: String, value: f64 },
    NotFinite { criterion: String },
    /// A known criterion has no weight.
    Missing { criterion: String },
}

impl fmt::Display for WeightsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsIssue::ZeroSum => write!(f, "weights sum to zero"),
            WeightsIssue::Negative { criterion, value } => {
                write!(f, "weight for '{}' is negative ({})", criterion, value)
            }
            WeightsIssue::NotFinite { criterion } => {
                write!(f, "weight for '{}' is not a finite number", criterion)
            }
            WeightsIssue::Missing { criterion } => {
                write!(f, "no weight given for '{}'", criterion)
            }
        }
    }
}

/// Why a decision matrix could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixIssue {
    NoAlternatives,
    DuplicateAlternative { alternative: String },
    /// No alternative carries a value for this criterion.
    MissingColumn { criterion: String },
    MissingCell { alternative: String, criterion: String },
    NotNumeric {
        alternative: String,
        criterion: String,
        raw: String,
    },
}

impl fmt::Display for MatrixIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixIssue::NoAlternatives => write!(f, "matrix has no alternatives"),
            MatrixIssue::DuplicateAlternative { alternative } => {
                write!(f, "alternative '{}' appears more than once", alternative)
            }
            MatrixIssue::MissingColumn { criterion } => {
                write!(f, "column '{}' is missing", criterion)
            }
            MatrixIssue::MissingCell {
                alternative,
                criterion,
            } => write!(f, "alternative '{}' has no value for '{}'", alternative, criterion),
            MatrixIssue::NotNumeric {
                alternative,
                criterion,
                raw,
            } => write!(
                f,
                "value '{}' for alternative '{}' on '{}' is not a number",
                raw, alternative, criterion
            ),
        }
    }
}

/// Errors raised by the scoring pipelines.
///
/// Engines validate everything up front and return one of these before any
/// partial result is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(WeightsIssue),

    #[error("Invalid matrix: {0}")]
    InvalidMatrix(MatrixIssue),
}

impl AnalysisError {
    /// Returns true for weight mapping failures.
    pub fn is_invalid_weights(&self) -> bool {
        matches!(self, AnalysisError::InvalidWeights(_))
    }

    /// Returns true for decision matrix failures.
    pub fn is_invalid_matrix(&self) -> bool {
        matches!(self, AnalysisError::InvalidMatrix(_))
    }
}

impl From<WeightsIssue> for AnalysisError {
    fn from(issue: WeightsIssue) -> Self {
        AnalysisError::InvalidWeights(issue)
    }
}

impl From<MatrixIssue> for AnalysisError {
    fn from(issue: MatrixIssue) -> Self {
        AnalysisError::InvalidMatrix(issue)
    }
}
