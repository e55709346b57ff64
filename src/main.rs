//! Hosting Ranker command line entry point.
//!
//! Loads configuration from the environment, loads a dataset (the first
//! argument, then `HOSTING_RANKER__DATASET__PATH`, then the built-in sample),
//! runs both methods and prints the report as JSON on stdout. Logs go to stderr.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use hosting_ranker::adapters::{FileDatasetSource, SampleDatasetSource};
use hosting_ranker::application::{RunAnalysisHandler, StartSessionCommand, StartSessionHandler};
use hosting_ranker::config::{AppConfig, LoggingConfig};
use hosting_ranker::ports::DatasetSource;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Ranking failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let dataset_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.dataset.path().map(Path::to_path_buf));
    let source: Arc<dyn DatasetSource> = match dataset_path {
        Some(path) => Arc::new(FileDatasetSource::new(path)),
        None => Arc::new(SampleDatasetSource::new()),
    };

    let started = StartSessionHandler::new(source).handle(StartSessionCommand {
        weight_overrides: config.weight_overrides(),
    })?;
    let mut session = started.session;
    let report = RunAnalysisHandler::new(started.registry).handle(&mut session)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
