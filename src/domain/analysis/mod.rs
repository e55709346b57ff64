//! Analysis Module - Pure scoring pipelines for ranking alternatives.
//!
//! # Components
//!
//! - `DecisionMatrix` - Caller-supplied alternatives x criteria table
//! - `WeightNormalizer` - Rescales weights to sum to one
//! - `SawEngine` - Simple Additive Weighting
//! - `WpEngine` - Weighted Product
//! - `Comparator` - Agreement report between the two methods
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. They borrow their inputs, never
//! modify them, and return fresh results. Full precision is kept; rounding
//! is left to whoever displays the numbers.

mod comparator;
mod decision_matrix;
mod ranking;
mod saw_engine;
mod weights;
mod wp_engine;

pub use comparator::{Comparator, ComparisonRow, MethodComparison, RankMismatch};
pub use decision_matrix::{
    AlternativeRow, DecisionMatrix, DecisionMatrixBuilder, NumericMatrix, RawValue,
};
pub use ranking::{competition_ranks, RankedAlternative, ResultTable};
pub use saw_engine::{SawAnalysis, SawEngine};
pub use weights::{NormalizedWeights, WeightMapping, WeightNormalizer};
pub use wp_engine::{WpAnalysis, WpEngine};

/// Substitute for zero denominators and the lower clamp for WP bases.
pub const ZERO_GUARD_EPSILON: f64 = 1e-12;
