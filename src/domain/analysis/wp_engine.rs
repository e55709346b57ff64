//! WP Engine - Weighted Product.
//!
//! # Algorithm
//! 1. Exponent per criterion: `w` for benefit, `-|w|` for cost.
//! 2. Raw score `S_i = Π max(x_ij, ε) ^ e_j`.
//! 3. Share `V_i = S_i / Σ S`.
//! 4. Rank shares descending with competition ranking.
//!
//! # Edge Cases
//! - Values below [`ZERO_GUARD_EPSILON`] (zero and negatives included) are
//!   clamped to it before exponentiation.
//! - Many criteria or extreme magnitudes can overflow or underflow the product.
//!   No special handling beyond the clamp; a zero or infinite total yields
//!   non-finite shares.

use serde::Serialize;
use tracing::debug;

use super::{DecisionMatrix, NormalizedWeights, NumericMatrix, ResultTable, ZERO_GUARD_EPSILON};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, Polarity};

/// Every step of a WP run.
///
/// `raw_scores` are kept for diagnostics; the result table carries only the
/// normalized share and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WpAnalysis {
    /// Registry columns of the input, as real numbers.
    pub raw_matrix: NumericMatrix,
    /// Signed exponent per criterion, in criterion order.
    pub exponents: Vec<f64>,
    /// `S_i` per alternative, in row order.
    pub raw_scores: Vec<f64>,
    /// `V_i` per alternative, in row order. Sums to one.
    pub shares: Vec<f64>,
    /// Share and rank per alternative.
    pub result: ResultTable,
}

/// Weighted Product scoring.
pub struct WpEngine;

impl WpEngine {
    /// Runs the full WP pipeline.
    ///
    /// # Errors
    /// - `InvalidMatrix` if the matrix cannot be extracted for the registry
    /// - `InvalidWeights` if a registry criterion has no weight
    pub fn evaluate(
        matrix: &DecisionMatrix,
        registry: &CriteriaRegistry,
        weights: &NormalizedWeights,
    ) -> Result<WpAnalysis, AnalysisError> {
        let raw_matrix = matrix.extract(registry)?;
        let weights = weights.aligned_to(registry)?;

        let exponents: Vec<f64> = registry
            .iter()
            .zip(&weights)
            .map(|(criterion, &w)| Self::exponent(criterion.polarity, w))
            .collect();

        let raw_scores: Vec<f64> = (0..raw_matrix.row_count())
            .map(|i| {
                raw_matrix
                    .row(i)
                    .iter()
                    .zip(&exponents)
                    .map(|(&x, &e)| x.max(ZERO_GUARD_EPSILON).powf(e))
                    .product()
            })
            .collect();

        let total: f64 = raw_scores.iter().sum();
        if total == 0.0 || !total.is_finite() {
            debug!(total, "weighted product total is degenerate");
        }
        let shares: Vec<f64> = raw_scores.iter().map(|s| s / total).collect();
        let result = ResultTable::from_scores(raw_matrix.alternative_ids(), &shares);

        Ok(WpAnalysis {
            raw_matrix,
            exponents,
            raw_scores,
            shares,
            result,
        })
    }

    /// Signed exponent for a normalized weight.
    pub fn exponent(polarity: Polarity, weight: f64) -> f64 {
        if polarity.is_cost() {
            -weight.abs()
        } else {
            weight
        }
    }
}
