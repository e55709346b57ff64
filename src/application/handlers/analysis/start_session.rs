//! StartSessionHandler - Opens a fresh analysis session from a dataset.
//!
//! Loads the dataset, applies any weight overrides on top of the registry's
//! default weights, and returns a session that owns its own copy of the data.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::analysis::WeightMapping;
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::AnalysisError;
use crate::domain::session::AnalysisSession;
use crate::ports::{DatasetError, DatasetSource};

/// Command to start a session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Replaces default weights for the named criteria. Keys match criterion
    /// ids case-insensitively.
    pub weight_overrides: WeightMapping,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub registry: Arc<CriteriaRegistry>,
    pub session: AnalysisSession,
}

/// Errors that can occur while starting a session.
#[derive(Debug, thiserror::Error)]
pub enum StartSessionError {
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Weight override for unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Handler for starting analysis sessions.
pub struct StartSessionHandler {
    source: Arc<dyn DatasetSource>,
}

impl StartSessionHandler {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    pub fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        let dataset = self.source.load()?;
        let weights = Self::merge_weights(&dataset.registry, &cmd.weight_overrides)?;
        let session = AnalysisSession::new(dataset.matrix, &weights)?;

        info!(
            session_id = %session.id(),
            alternatives = session.matrix().len(),
            criteria = dataset.registry.len(),
            "Analysis session started"
        );

        Ok(StartSessionResult {
            registry: Arc::new(dataset.registry),
            session,
        })
    }

    /// Registry defaults with overrides applied.
    fn merge_weights(
        registry: &CriteriaRegistry,
        overrides: &WeightMapping,
    ) -> Result<WeightMapping, StartSessionError> {
        let mut weights = registry.default_weights();
        for (key, value) in overrides.iter() {
            let criterion = registry
                .iter()
                .find(|c| c.id.eq_ignore_ascii_case(key))
                .ok_or_else(|| StartSessionError::UnknownCriterion(key.to_string()))?;
            debug!(
                criterion = %criterion.id,
                polarity = %criterion.polarity,
                weight = value,
                "Weight override applied"
            );
            weights.set(criterion.id.clone(), value);
        }
        Ok(weights)
    }
}
