//! SAW Engine - Simple Additive Weighting.
//!
//! # Algorithm
//! 1. Normalize each column by polarity:
//!    - benefit: `r = x / max`
//!    - cost:    `r = min / x`
//! 2. Multiply each normalized column by its weight.
//! 3. Score each alternative as the sum of its weighted row.
//! 4. Rank scores descending with competition ranking.
//!
//! # Degenerate Inputs
//! - A benefit column whose maximum is zero uses 1 as the denominator.
//! - A zero cost cell is replaced by [`ZERO_GUARD_EPSILON`] as the denominator.
//!   With a positive column minimum this yields a very large finite value; it is
//!   not clamped.

use serde::Serialize;
use tracing::debug;

use super::{
    DecisionMatrix, NormalizedWeights, NumericMatrix, ResultTable, ZERO_GUARD_EPSILON,
};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, Polarity};

/// Every step of a SAW run, for explanatory display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SawAnalysis {
    /// Registry columns of the input, as real numbers.
    pub raw_matrix: NumericMatrix,
    /// `r_ij` after polarity-aware normalization.
    pub normalized: NumericMatrix,
    /// `r_ij * w_j`.
    pub weighted: NumericMatrix,
    /// Column maxima of the raw matrix, in criterion order.
    pub column_max: Vec<f64>,
    /// Column minima of the raw matrix, in criterion order.
    pub column_min: Vec<f64>,
    /// Weights used, in criterion order.
    pub weights: Vec<f64>,
    /// Total score and rank per alternative.
    pub result: ResultTable,
}

/// Simple Additive Weighting scoring.
pub struct SawEngine;

impl SawEngine {
    /// Runs the full SAW pipeline.
    ///
    /// Inputs are borrowed and never modified.
    ///
    /// # Errors
    /// - `InvalidMatrix` if the matrix cannot be extracted for the registry
    /// - `InvalidWeights` if a registry criterion has no weight
    pub fn evaluate(
        matrix: &DecisionMatrix,
        registry: &CriteriaRegistry,
        weights: &NormalizedWeights,
    ) -> Result<SawAnalysis, AnalysisError> {
        let raw_matrix = matrix.extract(registry)?;
        let weights = weights.aligned_to(registry)?;
        let polarities: Vec<Polarity> = registry.iter().map(|c| c.polarity).collect();

        let column_max = raw_matrix.column_max();
        let column_min = raw_matrix.column_min();

        let normalized = Self::normalize(&raw_matrix, &polarities, &column_max, &column_min);
        let weighted = normalized.map_columns(|j, column| {
            column.iter().map(|r| r * weights[j]).collect()
        });
        let scores = weighted.row_sums();
        let result = ResultTable::from_scores(raw_matrix.alternative_ids(), &scores);

        Ok(SawAnalysis {
            raw_matrix,
            normalized,
            weighted,
            column_max,
            column_min,
            weights,
            result,
        })
    }

    fn normalize(
        raw: &NumericMatrix,
        polarities: &[Polarity],
        column_max: &[f64],
        column_min: &[f64],
    ) -> NumericMatrix {
        raw.map_columns(|j, column| match polarities[j] {
            Polarity::Benefit => {
                let denominator = if column_max[j] != 0.0 {
                    column_max[j]
                } else {
                    debug!(criterion = %raw.criterion_ids()[j], "benefit column maximum is zero");
                    1.0
                };
                column.iter().map(|x| x / denominator).collect()
            }
            Polarity::Cost => column
                .iter()
                .map(|&x| {
                    let denominator = if x != 0.0 {
                        x
                    } else {
                        debug!(criterion = %raw.criterion_ids()[j], "zero cost cell");
                        ZERO_GUARD_EPSILON
                    };
                    column_min[j] / denominator
                })
                .collect(),
        })
    }
}
