//! Comparator - Reconciles SAW and WP result tables.

use serde::{Deserialize, Serialize};

use super::ResultTable;

/// Both methods' score and rank for one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub alternative_id: String,
    pub saw_score: f64,
    pub saw_rank: u32,
    /// WP preference share.
    pub wp_score: f64,
    pub wp_rank: u32,
}

impl ComparisonRow {
    /// Returns true if the two methods disagree on this alternative's rank.
    pub fn is_mismatch(&self) -> bool {
        self.saw_rank != self.wp_rank
    }
}

/// An alternative ranked differently by the two methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankMismatch {
    pub alternative_id: String,
    pub saw_rank: u32,
    pub wp_rank: u32,
}

/// Side-by-side report of both methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    /// One row per alternative, in SAW table order.
    pub rows: Vec<ComparisonRow>,
    /// First alternative holding SAW's minimum rank.
    pub top_saw: Option<String>,
    /// First alternative holding WP's minimum rank.
    pub top_wp: Option<String>,
    /// True iff both methods pick the same top alternative.
    pub agreement: bool,
    pub mismatches: Vec<RankMismatch>,
}

impl MethodComparison {
    /// Human-readable verdict for display.
    pub fn verdict(&self) -> String {
        match (&self.top_saw, &self.top_wp) {
            (Some(saw), Some(_)) if self.agreement => format!("Both methods agree: {}", saw),
            (Some(saw), Some(wp)) => format!("Methods differ: SAW = {}, WP = {}", saw, wp),
            _ => "No alternatives to compare".to_string(),
        }
    }
}

/// Read-only join of two result tables.
pub struct Comparator;

impl Comparator {
    /// Joins the tables by alternative id and reports agreement.
    ///
    /// Both tables are assumed to come from the same matrix. Alternatives
    /// missing from the WP table are left out of the combined rows.
    pub fn compare(saw: &ResultTable, wp: &ResultTable) -> MethodComparison {
        let rows: Vec<ComparisonRow> = saw
            .entries
            .iter()
            .filter_map(|s| {
                wp.get(&s.alternative_id).map(|w| ComparisonRow {
                    alternative_id: s.alternative_id.clone(),
                    saw_score: s.score,
                    saw_rank: s.rank,
                    wp_score: w.score,
                    wp_rank: w.rank,
                })
            })
            .collect();

        let mismatches = rows
            .iter()
            .filter(|r| r.is_mismatch())
            .map(|r| RankMismatch {
                alternative_id: r.alternative_id.clone(),
                saw_rank: r.saw_rank,
                wp_rank: r.wp_rank,
            })
            .collect();

        let top_saw = saw.top().map(|e| e.alternative_id.clone());
        let top_wp = wp.top().map(|e| e.alternative_id.clone());
        let agreement = top_saw.is_some() && top_saw == top_wp;

        MethodComparison {
            rows,
            top_saw,
            top_wp,
            agreement,
            mismatches,
        }
    }
}
