//! Algorithm category: the closed set of platform extension points.

use super::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension point an algorithm plugs into.
///
/// Each category carries its own namespace of entry names: a tuner and an
/// assessor may share a name without collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Hyperparameter search strategy.
    Tuner,
    /// Early-stopping judge for running trials.
    Assessor,
    /// Multi-fidelity scheduler combining search and trial control.
    Advisor,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Self; 3] = [Self::Tuner, Self::Assessor, Self::Advisor];

    /// Returns the lowercase category label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tuner => "tuner",
            Self::Assessor => "assessor",
            Self::Advisor => "advisor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tuner" => Ok(Self::Tuner),
            "assessor" => Ok(Self::Assessor),
            "advisor" => Ok(Self::Advisor),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}
