//! Zone evaluation configuration

use serde::{Deserialize, Serialize};

/// When a country record runs its zone builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// On the first read of the zone list
    #[default]
    Lazy,
    /// Inside the constructor, so reads never pay for resolution
    Eager,
}

impl EvaluationMode {
    #[must_use]
    pub fn is_eager(self) -> bool {
        self == Self::Eager
    }
}

impl From<bool> for EvaluationMode {
    /// Maps an `evaluate_immediately` flag
    fn from(evaluate_immediately: bool) -> Self {
        if evaluate_immediately {
            Self::Eager
        } else {
            Self::Lazy
        }
    }
}
