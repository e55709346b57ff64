//! Built-in sample dataset: five hosting plans scored on the hosting criteria.

use crate::domain::analysis::DecisionMatrix;
use crate::domain::criteria::HOSTING_CRITERIA;
use crate::ports::{Dataset, DatasetError, DatasetSource};

/// Serves the built-in hosting sample. Never fails.
#[derive(Debug, Clone, Default)]
pub struct SampleDatasetSource;

impl SampleDatasetSource {
    pub fn new() -> Self {
        Self
    }

    /// The five hosting alternatives, A1 to A5.
    pub fn hosting_sample() -> Dataset {
        let matrix = DecisionMatrix::builder()
            .alternative(
                "A1",
                [("C1", 500000.0), ("C2", 8.0), ("C3", 10.0), ("C4", 1000.0), ("C5", 1.0)],
            )
            .alternative(
                "A2",
                [("C1", 450000.0), ("C2", 7.0), ("C3", 20.0), ("C4", 1500.0), ("C5", 2.0)],
            )
            .alternative(
                "A3",
                [("C1", 600000.0), ("C2", 9.0), ("C3", 15.0), ("C4", 2000.0), ("C5", 1.0)],
            )
            .alternative(
                "A4",
                [("C1", 400000.0), ("C2", 6.0), ("C3", 25.0), ("C4", 800.0), ("C5", 3.0)],
            )
            .alternative(
                "A5",
                [("C1", 550000.0), ("C2", 8.0), ("C3", 30.0), ("C4", 1200.0), ("C5", 2.0)],
            )
            .build();

        Dataset {
            registry: HOSTING_CRITERIA.clone(),
            matrix,
        }
    }
}

impl DatasetSource for SampleDatasetSource {
    fn load(&self) -> Result<Dataset, DatasetError> {
        Ok(Self::hosting_sample())
    }
}
