//! Polarity value object: whether higher or lower raw values are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw value is better.
    #[default]
    Benefit,
    /// Lower raw value is better.
    Cost,
}

impl Polarity {
    /// Returns the lowercase label used in data files.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
        }
    }

    /// Returns true for cost criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, Polarity::Cost)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
