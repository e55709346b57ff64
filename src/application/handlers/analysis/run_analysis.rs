//! RunAnalysisHandler - Runs both scoring methods over a session's data.
//!
//! Pipeline: SAW and WP over the session's matrix and normalized weights,
//! then the comparator. Results are recorded on the session and returned as
//! a report for display.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::analysis::{Comparator, NormalizedWeights, ResultTable, SawEngine, WpEngine};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, SessionId, Timestamp};
use crate::domain::session::{AnalysisResults, AnalysisSession};

/// Everything the caller needs to render one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub session_id: SessionId,
    pub criteria: CriteriaRegistry,
    pub weights: NormalizedWeights,
    /// One-line agreement summary, e.g. "Both methods agree: A2".
    pub verdict: String,
    #[serde(flatten)]
    pub results: AnalysisResults,
}

/// Handler for running the SAW and WP pipelines.
pub struct RunAnalysisHandler {
    registry: Arc<CriteriaRegistry>,
}

impl RunAnalysisHandler {
    pub fn new(registry: Arc<CriteriaRegistry>) -> Self {
        Self { registry }
    }

    /// Runs both methods and records the outcome on the session.
    ///
    /// # Errors
    ///
    /// `InvalidMatrix` or `InvalidWeights` from either engine. On error the
    /// session is left unchanged.
    pub fn handle(&self, session: &mut AnalysisSession) -> Result<AnalysisReport, AnalysisError> {
        let results = self.evaluate(session).map_err(|e| {
            warn!(session_id = %session.id(), error = %e, "Analysis rejected input");
            e
        })?;
        let verdict = results.comparison.verdict();

        info!(
            session_id = %session.id(),
            agreement = results.comparison.agreement,
            verdict = %verdict,
            "Analysis completed"
        );
        session.record_results(results.clone());

        Ok(AnalysisReport {
            session_id: *session.id(),
            criteria: (*self.registry).clone(),
            weights: session.weights().clone(),
            verdict,
            results,
        })
    }

    fn evaluate(&self, session: &AnalysisSession) -> Result<AnalysisResults, AnalysisError> {
        let saw = SawEngine::evaluate(session.matrix(), &self.registry, session.weights())?;
        let wp = WpEngine::evaluate(session.matrix(), &self.registry, session.weights())?;
        let comparison = Comparator::compare(&saw.result, &wp.result);

        debug!(
            session_id = %session.id(),
            saw_order = ?rank_order(&saw.result),
            wp_order = ?rank_order(&wp.result),
            saw_ties = !saw.result.is_total_order(),
            wp_ties = !wp.result.is_total_order(),
            mismatches = comparison.mismatches.len(),
            "Methods compared"
        );

        Ok(AnalysisResults {
            saw,
            wp,
            comparison,
            computed_at: Timestamp::now(),
        })
    }
}

/// Alternative ids, best first.
fn rank_order(table: &ResultTable) -> Vec<&str> {
    table
        .sorted_by_rank()
        .into_iter()
        .map(|e| e.alternative_id.as_str())
        .collect()
}
