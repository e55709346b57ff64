//! Analysis session aggregate.
//!
//! A session holds one caller's working data: the edited decision matrix,
//! the edited weights, and the results of the last computation. Sessions
//! never share state; the scoring engines hold none at all.

use serde::Serialize;

use crate::domain::analysis::{
    DecisionMatrix, MethodComparison, NormalizedWeights, SawAnalysis, WeightMapping,
    WeightNormalizer, WpAnalysis,
};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, SessionId, Timestamp};

/// Output of one complete pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResults {
    pub saw: SawAnalysis,
    pub wp: WpAnalysis,
    pub comparison: MethodComparison,
    pub computed_at: Timestamp,
}

/// Working state for one caller.
///
/// # Invariants
///
/// - `weights` always sum to one
/// - `last_results`, when present, were computed from the current matrix and weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSession {
    id: SessionId,
    matrix: DecisionMatrix,
    weights: NormalizedWeights,
    last_results: Option<AnalysisResults>,
}

impl AnalysisSession {
    /// Creates a session with explicit weights.
    ///
    /// # Errors
    ///
    /// - `InvalidWeights` if the weights cannot be normalized
    pub fn new(matrix: DecisionMatrix, weights: &WeightMapping) -> Result<Self, AnalysisError> {
        Ok(Self {
            id: SessionId::new(),
            matrix,
            weights: WeightNormalizer::normalize(weights)?,
            last_results: None,
        })
    }

    /// Creates a session seeded with the registry's default weights.
    pub fn with_default_weights(
        matrix: DecisionMatrix,
        registry: &CriteriaRegistry,
    ) -> Result<Self, AnalysisError> {
        Self::new(matrix, &registry.default_weights())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn weights(&self) -> &NormalizedWeights {
        &self.weights
    }

    pub fn last_results(&self) -> Option<&AnalysisResults> {
        self.last_results.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the whole matrix and discards stale results.
    pub fn replace_matrix(&mut self, matrix: DecisionMatrix) {
        self.matrix = matrix;
        self.last_results = None;
    }

    /// Normalizes and stores new weights, discarding stale results.
    ///
    /// # Errors
    ///
    /// - `InvalidWeights` if the weights cannot be normalized; the previous
    ///   weights and results are kept.
    pub fn update_weights(&mut self, weights: &WeightMapping) -> Result<(), AnalysisError> {
        self.weights = WeightNormalizer::normalize(weights)?;
        self.last_results = None;
        Ok(())
    }

    /// Stores the results of a run over the current matrix and weights.
    pub fn record_results(&mut self, results: AnalysisResults) {
        self.last_results = Some(results);
    }
}
