//! Criteria Registry - Ordered, validated set of criteria.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::analysis::WeightMapping;
use crate::domain::foundation::{Polarity, ValidationError};

/// A single criterion alternatives are scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique code, e.g. "C1".
    pub id: String,
    /// Display name.
    pub name: String,
    pub polarity: Polarity,
    /// Weight used when the caller does not supply one.
    pub default_weight: f64,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        polarity: Polarity,
        default_weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            polarity,
            default_weight,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(id: impl Into<String>, name: impl Into<String>, default_weight: f64) -> Self {
        Self::new(id, name, Polarity::Benefit, default_weight)
    }

    /// Creates a cost criterion.
    pub fn cost(id: impl Into<String>, name: impl Into<String>, default_weight: f64) -> Self {
        Self::new(id, name, Polarity::Cost, default_weight)
    }
}

/// Ordered mapping from criterion id to its metadata.
///
/// Insertion order is the column order of every matrix the engines produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CriteriaRegistry {
    criteria: Vec<Criterion>,
}

impl CriteriaRegistry {
    /// Builds a registry, rejecting empty sets, blank or duplicate ids, and
    /// default weights that are negative or not finite.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if criterion.id.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion.id"));
            }
            if !seen.insert(criterion.id.as_str()) {
                return Err(ValidationError::duplicate("criterion", criterion.id.clone()));
            }
            if !criterion.default_weight.is_finite() || criterion.default_weight < 0.0 {
                return Err(ValidationError::negative_or_non_finite(
                    format!("{}.default_weight", criterion.id),
                    criterion.default_weight,
                ));
            }
        }

        Ok(Self { criteria })
    }

    /// Looks up a criterion by id.
    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Criterion ids in registry order.
    pub fn ids(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false for a constructed registry; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The default weight of every criterion, not yet normalized.
    pub fn default_weights(&self) -> WeightMapping {
        self.criteria
            .iter()
            .map(|c| (c.id.clone(), c.default_weight))
            .collect()
    }
}

impl<'de> Deserialize<'de> for CriteriaRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let criteria = Vec::<Criterion>::deserialize(deserializer)?;
        CriteriaRegistry::new(criteria).map_err(serde::de::Error::custom)
    }
}

/// Default registry for comparing web hosting plans.
pub static HOSTING_CRITERIA: Lazy<CriteriaRegistry> = Lazy::new(|| CriteriaRegistry {
    criteria: vec![
        Criterion::cost("C1", "Price", 0.30),
        Criterion::benefit("C2", "Websites", 0.25),
        Criterion::benefit("C3", "Storage", 0.15),
        Criterion::benefit("C4", "Visitors", 0.20),
        Criterion::benefit("C5", "Domains", 0.10),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosting_registry_has_five_criteria_in_order() {
        assert_eq!(HOSTING_CRITERIA.ids(), vec!["C1", "C2", "C3", "C4", "C5"]);
        assert_eq!(HOSTING_CRITERIA.get("C1").unwrap().polarity, Polarity::Cost);
        assert_eq!(HOSTING_CRITERIA.get("C4").unwrap().polarity, Polarity::Benefit);
    }

    #[test]
    fn hosting_default_weights_sum_to_one() {
        let total: f64 = HOSTING_CRITERIA.iter().map(|c| c.default_weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hosting_registry_is_valid() {
        let rebuilt = CriteriaRegistry::new(HOSTING_CRITERIA.iter().cloned().collect());
        assert_eq!(rebuilt.as_ref(), Ok(&*HOSTING_CRITERIA));
    }

    #[test]
    fn registry_rejects_empty_set() {
        assert!(CriteriaRegistry::new(vec![]).is_err());
    }

    #[test]
    fn registry_rejects_duplicate_ids() {
        let result = CriteriaRegistry::new(vec![
            Criterion::cost("C1", "Price", 0.5),
            Criterion::benefit("C1", "Storage", 0.5),
        ]);
        assert_eq!(result, Err(ValidationError::duplicate("criterion", "C1")));
    }

    #[test]
    fn registry_rejects_blank_ids() {
        let result = CriteriaRegistry::new(vec![Criterion::cost("  ", "Price", 0.5)]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn registry_rejects_negative_default_weight() {
        let result = CriteriaRegistry::new(vec![Criterion::cost("C1", "Price", -0.1)]);
        assert!(matches!(result, Err(ValidationError::NegativeOrNonFinite { .. })));
    }

    #[test]
    fn registry_does_not_fix_the_criteria_count() {
        let registry = CriteriaRegistry::new(vec![
            Criterion::benefit("uptime", "Uptime", 2.0),
            Criterion::cost("latency", "Latency", 1.0),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        let defaults = registry.default_weights();
        assert_eq!(defaults.get("uptime"), Some(2.0));
        assert_eq!(defaults.get("latency"), Some(1.0));
    }

    #[test]
    fn registry_deserializes_and_validates() {
        let json = r#"[
            {"id": "C1", "name": "Price", "polarity": "cost", "default_weight": 0.6},
            {"id": "C2", "name": "Storage", "polarity": "benefit", "default_weight": 0.4}
        ]"#;
        let registry: CriteriaRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.ids(), vec!["C1", "C2"]);

        let duplicate = r#"[
            {"id": "C1", "name": "Price", "polarity": "cost", "default_weight": 0.6},
            {"id": "C1", "name": "Storage", "polarity": "benefit", "default_weight": 0.4}
        ]"#;
        assert!(serde_json::from_str::<CriteriaRegistry>(duplicate).is_err());
    }
}
