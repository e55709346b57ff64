//! Analysis handlers.
//!
//! Handlers that open analysis sessions and run the scoring pipelines.

mod run_analysis;
mod start_session;

pub use run_analysis::{AnalysisReport, RunAnalysisHandler};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
