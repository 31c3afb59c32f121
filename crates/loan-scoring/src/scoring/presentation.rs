use serde::{Deserialize, Serialize};

use super::model::LoanClass;

/// User-facing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanVerdict {
    Accepted,
    Rejected,
}

impl LoanVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<LoanClass> for LoanVerdict {
    fn from(class: LoanClass) -> Self {
        match class {
            LoanClass::Accept => Self::Accepted,
            LoanClass::Reject => Self::Rejected,
        }
    }
}

/// Percentage with one decimal, e.g. `0.82` renders as `82.0%`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Whole-percent progress value, truncated and clamped to 0..=100.
pub fn progress_percent(probability: f64) -> u8 {
    (probability * 100.0).clamp(0.0, 100.0) as u8
}
