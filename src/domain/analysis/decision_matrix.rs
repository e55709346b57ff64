//! Decision Matrix - Alternatives x criteria input table and its numeric form.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{AnalysisError, MatrixIssue};

/// A cell as supplied by the caller, before numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Anything else a data file can hold (null, booleans, lists). Never numeric.
    Other(serde_json::Value),
}

impl RawValue {
    /// Coerces the cell to a finite real number.
    ///
    /// Text is trimmed and parsed; NaN and infinities are rejected.
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RawValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// True for an explicit null cell, which counts as missing.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Other(serde_json::Value::Null))
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// One alternative and its value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRow {
    pub id: String,
    /// Optional display name, e.g. the hosting provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values keyed by criterion id. Columns the registry does not know are ignored.
    pub values: HashMap<String, RawValue>,
}

impl AlternativeRow {
    /// Creates a row from criterion/value pairs.
    pub fn new<K, V>(id: impl Into<String>, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
    {
        Self {
            id: id.into(),
            name: None,
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered alternative rows as supplied by the caller.
///
/// Row order is the presentation order. The matrix is never edited in place;
/// callers replace it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<AlternativeRow>,
}

impl DecisionMatrix {
    /// Creates a matrix from rows.
    pub fn new(rows: Vec<AlternativeRow>) -> Self {
        Self { rows }
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Synthetic label for the row at `index`: "A1", "A2", ...
    pub fn positional_label(index: usize) -> String {
        format!("A{}", index + 1)
    }

    pub fn rows(&self) -> &[AlternativeRow] {
        &self.rows
    }

    pub fn alternative_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selects the registry's columns, in registry order, as real numbers.
    ///
    /// # Errors
    /// `InvalidMatrix` when there are no rows, an id repeats, a column is
    /// absent, a cell is missing, or a cell cannot be coerced to a finite number.
    pub fn extract(&self, registry: &CriteriaRegistry) -> Result<NumericMatrix, AnalysisError> {
        if self.rows.is_empty() {
            return Err(MatrixIssue::NoAlternatives.into());
        }

        let mut seen = HashSet::new();
        for row in &self.rows {
            if !seen.insert(row.id.as_str()) {
                return Err(MatrixIssue::DuplicateAlternative {
                    alternative: row.id.clone(),
                }
                .into());
            }
        }

        for criterion in registry.iter() {
            if !self.rows.iter().any(|r| r.values.contains_key(&criterion.id)) {
                return Err(MatrixIssue::MissingColumn {
                    criterion: criterion.id.clone(),
                }
                .into());
            }
        }

        let mut values = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut numeric = Vec::with_capacity(registry.len());
            for criterion in registry.iter() {
                let raw = row
                    .values
                    .get(&criterion.id)
                    .filter(|raw| !raw.is_null())
                    .ok_or_else(|| {
                        AnalysisError::from(MatrixIssue::MissingCell {
                            alternative: row.id.clone(),
                            criterion: criterion.id.clone(),
                        })
                    })?;
                let value = raw.coerce().ok_or_else(|| {
                    AnalysisError::from(MatrixIssue::NotNumeric {
                        alternative: row.id.clone(),
                        criterion: criterion.id.clone(),
                        raw: raw.to_string(),
                    })
                })?;
                numeric.push(value);
            }
            values.push(numeric);
        }

        Ok(NumericMatrix {
            alternative_ids: self.rows.iter().map(|r| r.id.clone()).collect(),
            criterion_ids: registry.iter().map(|c| c.id.clone()).collect(),
            values,
        })
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<AlternativeRow>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative.
    pub fn alternative<K, V>(
        mut self,
        id: impl Into<String>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
    {
        self.rows.push(AlternativeRow::new(id, values));
        self
    }

    /// Appends a prepared row.
    pub fn row(mut self, row: AlternativeRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Builds the decision matrix.
    pub fn build(self) -> DecisionMatrix {
        DecisionMatrix { rows: self.rows }
    }
}

/// A dense real-valued alternatives x criteria table.
///
/// Used for the raw, normalized and weighted matrices the engines expose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericMatrix {
    alternative_ids: Vec<String>,
    criterion_ids: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl NumericMatrix {
    /// Same labels as `self`, values replaced column by column.
    pub(crate) fn map_columns<F>(&self, mut f: F) -> NumericMatrix
    where
        F: FnMut(usize, &[f64]) -> Vec<f64>,
    {
        let mut values = vec![Vec::with_capacity(self.column_count()); self.row_count()];
        for j in 0..self.column_count() {
            let column = self.column(j);
            for (i, v) in f(j, &column).into_iter().enumerate() {
                values[i].push(v);
            }
        }
        NumericMatrix {
            alternative_ids: self.alternative_ids.clone(),
            criterion_ids: self.criterion_ids.clone(),
            values,
        }
    }

    pub fn alternative_ids(&self) -> &[String] {
        &self.alternative_ids
    }

    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    pub fn row_count(&self) -> usize {
        self.alternative_ids.len()
    }

    pub fn column_count(&self) -> usize {
        self.criterion_ids.len()
    }

    /// Values of the row at `index`, in criterion order.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.values[index]
    }

    /// Values of the column at `index`, in alternative order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[index]).collect()
    }

    /// Looks up a cell by alternative and criterion ids.
    pub fn get(&self, alternative_id: &str, criterion_id: &str) -> Option<f64> {
        let i = self.alternative_ids.iter().position(|a| a == alternative_id)?;
        let j = self.criterion_ids.iter().position(|c| c == criterion_id)?;
        Some(self.values[i][j])
    }

    /// Sum of every row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.values.iter().map(|row| row.iter().sum()).collect()
    }

    /// Largest value of each column.
    pub fn column_max(&self) -> Vec<f64> {
        (0..self.column_count())
            .map(|j| self.column(j).into_iter().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Smallest value of each column.
    pub fn column_min(&self) -> Vec<f64> {
        (0..self.column_count())
            .map(|j| self.column(j).into_iter().fold(f64::INFINITY, f64::min))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, HOSTING_CRITERIA};

    fn two_criteria() -> CriteriaRegistry {
        CriteriaRegistry::new(vec![
            Criterion::cost("price", "Price", 0.5),
            Criterion::benefit("storage", "Storage", 0.5),
        ])
        .unwrap()
    }

    #[test]
    fn raw_value_coerces_numbers_and_numeric_text() {
        assert_eq!(RawValue::from(2.5).coerce(), Some(2.5));
        assert_eq!(RawValue::from(" 42 ").coerce(), Some(42.0));
        assert_eq!(RawValue::from("1e3").coerce(), Some(1000.0));
    }

    #[test]
    fn raw_value_rejects_non_numeric_and_non_finite() {
        assert_eq!(RawValue::from("cheap").coerce(), None);
        assert_eq!(RawValue::from("").coerce(), None);
        assert_eq!(RawValue::from("NaN").coerce(), None);
        assert_eq!(RawValue::from(f64::INFINITY).coerce(), None);
    }

    #[test]
    fn raw_value_deserializes_untagged() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[1.5, "2", 3]"#).unwrap();
        assert_eq!(values[0], RawValue::Number(1.5));
        assert_eq!(values[1], RawValue::Text("2".to_string()));
        assert_eq!(values[2], RawValue::Number(3.0));
    }

    #[test]
    fn raw_value_accepts_null_and_booleans() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[null, true, [1]]"#).unwrap();
        assert!(values[0].is_null());
        assert_eq!(values[1], RawValue::Other(serde_json::Value::Bool(true)));
        assert!(values.iter().all(|v| v.coerce().is_none()));
        assert_eq!(values[1].to_string(), "true");
    }

    #[test]
    fn extract_reports_null_cell_as_missing() {
        let row: AlternativeRow =
            serde_json::from_str(r#"{"id": "A1", "values": {"price": 1, "storage": null}}"#)
                .unwrap();
        let matrix = DecisionMatrix::new(vec![row]);
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::MissingCell {
                alternative: "A1".to_string(),
                criterion: "storage".to_string()
            }))
        );
    }

    #[test]
    fn extract_reports_boolean_cell_as_not_numeric() {
        let row: AlternativeRow =
            serde_json::from_str(r#"{"id": "A1", "values": {"price": false, "storage": 2}}"#)
                .unwrap();
        let matrix = DecisionMatrix::new(vec![row]);
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::NotNumeric {
                alternative: "A1".to_string(),
                criterion: "price".to_string(),
                raw: "false".to_string(),
            }))
        );
    }

    #[test]
    fn positional_labels_start_at_one() {
        assert_eq!(DecisionMatrix::positional_label(0), "A1");
        assert_eq!(DecisionMatrix::positional_label(4), "A5");
    }

    #[test]
    fn extract_selects_registry_columns_in_order() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("storage", 10.0), ("price", 5.0), ("colour", 1.0)])
            .alternative("A2", [("storage", 20.0), ("price", 4.0), ("colour", 2.0)])
            .build();

        let numeric = matrix.extract(&two_criteria()).unwrap();
        assert_eq!(numeric.criterion_ids(), &["price".to_string(), "storage".to_string()]);
        assert_eq!(numeric.row(0), &[5.0, 10.0]);
        assert_eq!(numeric.row(1), &[4.0, 20.0]);
        assert_eq!(numeric.get("A2", "storage"), Some(20.0));
        assert_eq!(numeric.get("A2", "colour"), None);
    }

    #[test]
    fn extract_coerces_text_cells() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", "5"), ("storage", "10.5")])
            .build();
        let numeric = matrix.extract(&two_criteria()).unwrap();
        assert_eq!(numeric.row(0), &[5.0, 10.5]);
    }

    #[test]
    fn extract_fails_on_empty_matrix() {
        let result = DecisionMatrix::default().extract(&HOSTING_CRITERIA);
        assert_eq!(result, Err(AnalysisError::InvalidMatrix(MatrixIssue::NoAlternatives)));
    }

    #[test]
    fn extract_fails_on_duplicate_alternative() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", 1.0), ("storage", 1.0)])
            .alternative("A1", [("price", 2.0), ("storage", 2.0)])
            .build();
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::DuplicateAlternative {
                alternative: "A1".to_string()
            }))
        );
    }

    #[test]
    fn extract_fails_on_missing_column() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", 1.0)])
            .alternative("A2", [("price", 2.0)])
            .build();
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::MissingColumn {
                criterion: "storage".to_string()
            }))
        );
    }

    #[test]
    fn extract_fails_on_missing_cell() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", 1.0), ("storage", 3.0)])
            .alternative("A2", [("price", 2.0)])
            .build();
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::MissingCell {
                alternative: "A2".to_string(),
                criterion: "storage".to_string()
            }))
        );
    }

    #[test]
    fn extract_fails_on_non_numeric_cell() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", "cheap"), ("storage", "3")])
            .build();
        assert_eq!(
            matrix.extract(&two_criteria()),
            Err(AnalysisError::InvalidMatrix(MatrixIssue::NotNumeric {
                alternative: "A1".to_string(),
                criterion: "price".to_string(),
                raw: "cheap".to_string(),
            }))
        );
    }

    #[test]
    fn column_extremes_and_row_sums() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", 3.0), ("storage", 1.0)])
            .alternative("A2", [("price", 1.0), ("storage", 4.0)])
            .build();
        let numeric = matrix.extract(&two_criteria()).unwrap();

        assert_eq!(numeric.column_max(), vec![3.0, 4.0]);
        assert_eq!(numeric.column_min(), vec![1.0, 1.0]);
        assert_eq!(numeric.row_sums(), vec![4.0, 5.0]);
    }

    #[test]
    fn map_columns_preserves_shape_and_labels() {
        let matrix = DecisionMatrix::builder()
            .alternative("A1", [("price", 3.0), ("storage", 1.0)])
            .alternative("A2", [("price", 1.0), ("storage", 4.0)])
            .build();
        let numeric = matrix.extract(&two_criteria()).unwrap();
        let doubled = numeric.map_columns(|_, column| column.iter().map(|v| v * 2.0).collect());

        assert_eq!(doubled.alternative_ids(), numeric.alternative_ids());
        assert_eq!(doubled.row(0), &[6.0, 2.0]);
        assert_eq!(doubled.row(1), &[2.0, 8.0]);
    }
}
