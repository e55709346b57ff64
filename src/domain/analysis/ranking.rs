//! Ranking - Competition ("minimum") ranking and per-method result tables.

use serde::{Deserialize, Serialize};

/// Ranks scores in descending order using competition ranking.
///
/// Tied scores share the better rank and the next distinct score skips the
/// tied count: `[10, 10, 7]` ranks as `[1, 1, 3]`. A NaN score is never
/// "greater" than anything and never has anything greater than it, so it
/// ranks 1 and does not push other ranks down.
pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .map(|score| 1 + scores.iter().filter(|other| *other > score).count() as u32)
        .collect()
}

/// One alternative's score and rank under a single method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: String,
    /// SAW total or WP preference share.
    pub score: f64,
    /// 1 is best.
    pub rank: u32,
}

/// Score and rank per alternative, in the matrix's row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub entries: Vec<RankedAlternative>,
}

impl ResultTable {
    /// Pairs ids with scores and assigns competition ranks.
    pub fn from_scores(alternative_ids: &[String], scores: &[f64]) -> Self {
        let ranks = competition_ranks(scores);
        let entries = alternative_ids
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(id, (&score, rank))| RankedAlternative {
                alternative_id: id.clone(),
                score,
                rank,
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, alternative_id: &str) -> Option<&RankedAlternative> {
        self.entries.iter().find(|e| e.alternative_id == alternative_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest rank present. Not necessarily 1 if scores are degenerate.
    pub fn min_rank(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.rank).min()
    }

    /// The first alternative, in row order, holding the minimum rank.
    pub fn top(&self) -> Option<&RankedAlternative> {
        let min = self.min_rank()?;
        self.entries.iter().find(|e| e.rank == min)
    }

    /// Entries ordered best first; ties keep row order.
    pub fn sorted_by_rank(&self) -> Vec<&RankedAlternative> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.rank);
        sorted
    }

    /// True when no two alternatives share a rank.
    pub fn is_total_order(&self) -> bool {
        let mut ranks: Vec<u32> = self.entries.iter().map(|e| e.rank).collect();
        ranks.sort_unstable();
        ranks.windows(2).all(|w| w[0] != w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("A{}", i)).collect()
    }

    #[test]
    fn ties_share_rank_and_skip() {
        assert_eq!(competition_ranks(&[10.0, 10.0, 7.0]), vec![1, 1, 3]);
    }

    #[test]
    fn tie_in_the_middle() {
        assert_eq!(competition_ranks(&[3.0, 5.0, 3.0, 1.0]), vec![2, 1, 2, 4]);
    }

    #[test]
    fn distinct_scores_rank_descending() {
        assert_eq!(competition_ranks(&[0.2, 0.9, 0.5]), vec![3, 1, 2]);
    }

    #[test]
    fn all_equal_scores_rank_first() {
        assert_eq!(competition_ranks(&[1.0, 1.0, 1.0]), vec![1, 1, 1]);
    }

    #[test]
    fn empty_scores_give_no_ranks() {
        assert!(competition_ranks(&[]).is_empty());
    }

    #[test]
    fn result_table_keeps_row_order() {
        let table = ResultTable::from_scores(&ids(3), &[0.2, 0.9, 0.5]);
        let order: Vec<_> = table.entries.iter().map(|e| e.alternative_id.as_str()).collect();
        assert_eq!(order, vec!["A1", "A2", "A3"]);
        assert_eq!(table.get("A2").unwrap().rank, 1);
    }

    #[test]
    fn top_picks_first_tied_alternative() {
        let table = ResultTable::from_scores(&ids(3), &[7.0, 10.0, 10.0]);
        assert_eq!(table.top().unwrap().alternative_id, "A2");
        assert_eq!(table.get("A3").unwrap().rank, 1);
        assert!(!table.is_total_order());
    }

    #[test]
    fn sorted_by_rank_is_best_first() {
        let table = ResultTable::from_scores(&ids(3), &[0.2, 0.9, 0.5]);
        let order: Vec<_> = table
            .sorted_by_rank()
            .iter()
            .map(|e| e.alternative_id.as_str())
            .collect();
        assert_eq!(order, vec!["A2", "A3", "A1"]);
        assert!(table.is_total_order());
    }

    #[test]
    fn empty_table_has_no_top() {
        let table = ResultTable::default();
        assert!(table.top().is_none());
        assert!(table.min_rank().is_none());
    }
}
