//! Weight Normalizer - Rescales a weight mapping so it sums to one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, WeightsIssue};

/// Raw, caller-supplied weights keyed by criterion id.
///
/// Values may be any non-negative reals; only their proportions matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMapping(BTreeMap<String, f64>);

impl WeightMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of a criterion, replacing any previous value.
    pub fn set(&mut self, criterion_id: impl Into<String>, weight: f64) {
        self.0.insert(criterion_id.into(), weight);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, criterion_id: impl Into<String>, weight: f64) -> Self {
        self.set(criterion_id, weight);
        self
    }

    pub fn get(&self, criterion_id: &str) -> Option<f64> {
        self.0.get(criterion_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy where every value is multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        self.iter().map(|(k, v)| (k.to_string(), v * factor)).collect()
    }
}

impl FromIterator<(String, f64)> for WeightMapping {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for WeightMapping {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

/// Weights that are known to sum to one.
///
/// Only [`WeightNormalizer::normalize`] can produce this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedWeights(BTreeMap<String, f64>);

impl NormalizedWeights {
    pub fn get(&self, criterion_id: &str) -> Option<f64> {
        self.0.get(criterion_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// Weights aligned to the registry's column order.
    ///
    /// Fails with `InvalidWeights` if any known criterion lacks a weight.
    /// Weights for criteria the registry does not know are ignored.
    pub fn aligned_to(&self, registry: &CriteriaRegistry) -> Result<Vec<f64>, AnalysisError> {
        registry
            .iter()
            .map(|criterion| {
                self.get(&criterion.id).ok_or_else(|| {
                    AnalysisError::from(WeightsIssue::Missing {
                        criterion: criterion.id.clone(),
                    })
                })
            })
            .collect()
    }
}

/// Stateless weight normalization.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Divides every weight by the sum of all weights.
    ///
    /// Values near `f64::MAX` are accepted; their sum never overflows.
    ///
    /// # Errors
    /// - `InvalidWeights(Negative | NotFinite)` for a bad individual value
    /// - `InvalidWeights(ZeroSum)` when the total is zero, including an empty mapping
    pub fn normalize(weights: &WeightMapping) -> Result<NormalizedWeights, AnalysisError> {
        for (criterion, value) in weights.iter() {
            if !value.is_finite() {
                return Err(WeightsIssue::NotFinite {
                    criterion: criterion.to_string(),
                }
                .into());
            }
            if value < 0.0 {
                return Err(WeightsIssue::Negative {
                    criterion: criterion.to_string(),
                    value,
                }
                .into());
            }
        }

        // Scale by the largest weight first so the sum cannot overflow.
        let largest = weights.iter().map(|(_, v)| v).fold(0.0, f64::max);
        if largest == 0.0 {
            return Err(WeightsIssue::ZeroSum.into());
        }
        let total: f64 = weights.iter().map(|(_, v)| v / largest).sum();

        Ok(NormalizedWeights(
            weights
                .iter()
                .map(|(k, v)| (k.to_string(), v / largest / total))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, HOSTING_CRITERIA};

    #[test]
    fn normalize_scales_to_unit_sum() {
        let weights = WeightMapping::new().with("C1", 3.0).with("C2", 1.0);
        let normalized = WeightNormalizer::normalize(&weights).unwrap();

        assert!((normalized.sum() - 1.0).abs() < 1e-12);
        assert!((normalized.get("C1").unwrap() - 0.75).abs() < 1e-12);
        assert!((normalized.get("C2").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalize_keeps_already_normalized_weights() {
        let normalized = WeightNormalizer::normalize(&HOSTING_CRITERIA.default_weights()).unwrap();
        assert!((normalized.get("C1").unwrap() - 0.30).abs() < 1e-12);
        assert!((normalized.get("C5").unwrap() - 0.10).abs() < 1e-12);
    }

    #[test]
    fn normalize_keeps_zero_entries() {
        let weights = WeightMapping::new().with("C1", 0.0).with("C2", 2.0);
        let normalized = WeightNormalizer::normalize(&weights).unwrap();
        assert_eq!(normalized.get("C1"), Some(0.0));
        assert_eq!(normalized.get("C2"), Some(1.0));
    }

    #[test]
    fn normalize_all_zero_fails() {
        let weights = WeightMapping::new().with("C1", 0.0).with("C2", 0.0);
        assert_eq!(
            WeightNormalizer::normalize(&weights),
            Err(AnalysisError::InvalidWeights(WeightsIssue::ZeroSum))
        );
    }

    #[test]
    fn normalize_empty_mapping_fails() {
        let result = WeightNormalizer::normalize(&WeightMapping::new());
        assert!(result.unwrap_err().is_invalid_weights());
    }

    #[test]
    fn normalize_rejects_negative_weight() {
        let weights = WeightMapping::new().with("C1", 1.0).with("C2", -0.5);
        assert_eq!(
            WeightNormalizer::normalize(&weights),
            Err(AnalysisError::InvalidWeights(WeightsIssue::Negative {
                criterion: "C2".to_string(),
                value: -0.5,
            }))
        );
    }

    #[test]
    fn normalize_rejects_nan() {
        let weights = WeightMapping::new().with("C1", f64::NAN);
        assert!(WeightNormalizer::normalize(&weights)
            .unwrap_err()
            .is_invalid_weights());
    }

    #[test]
    fn normalize_handles_weights_whose_sum_overflows() {
        let weights = WeightMapping::new().with("C1", 1e308).with("C2", 1e308);
        let normalized = WeightNormalizer::normalize(&weights).unwrap();

        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        assert!((normalized.get("C1").unwrap() - 0.5).abs() < 1e-12);
        assert!((normalized.get("C2").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_handles_tiny_weights() {
        let weights = WeightMapping::new().with("C1", 5e-324).with("C2", 0.0);
        let normalized = WeightNormalizer::normalize(&weights).unwrap();
        assert_eq!(normalized.get("C1"), Some(1.0));
        assert_eq!(normalized.get("C2"), Some(0.0));
    }

    #[test]
    fn normalize_does_not_touch_input() {
        let weights = WeightMapping::new().with("C1", 4.0);
        let _ = WeightNormalizer::normalize(&weights).unwrap();
        assert_eq!(weights.get("C1"), Some(4.0));
    }

    #[test]
    fn aligned_to_follows_registry_order() {
        let weights = WeightMapping::new()
            .with("C5", 1.0)
            .with("C4", 2.0)
            .with("C3", 3.0)
            .with("C2", 4.0)
            .with("C1", 10.0)
            .with("unused", 0.0);
        let normalized = WeightNormalizer::normalize(&weights).unwrap();
        let aligned = normalized.aligned_to(&HOSTING_CRITERIA).unwrap();

        assert_eq!(aligned.len(), 5);
        assert!((aligned[0] - 0.5).abs() < 1e-12);
        assert!((aligned[4] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn aligned_to_reports_missing_criterion() {
        let registry = CriteriaRegistry::new(vec![
            Criterion::cost("C1", "Price", 0.5),
            Criterion::benefit("C2", "Storage", 0.5),
        ])
        .unwrap();
        let normalized =
            WeightNormalizer::normalize(&WeightMapping::new().with("C1", 1.0)).unwrap();

        assert_eq!(
            normalized.aligned_to(&registry),
            Err(AnalysisError::InvalidWeights(WeightsIssue::Missing {
                criterion: "C2".to_string()
            }))
        );
    }

    #[test]
    fn weight_mapping_deserializes_from_json_object() {
        let weights: WeightMapping = serde_json::from_str(r#"{"C1": 0.3, "C2": 0.7}"#).unwrap();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights.get("C2"), Some(0.7));
    }
}
