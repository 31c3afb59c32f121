use serde::{Deserialize, Serialize};

/// Location of the financed property.
///
/// Encodes the `Property_Area_Semiurban` / `Property_Area_Urban` one-hot pair. Rural is the
/// implicit category where both flags are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyArea {
    #[default]
    Rural,
    Semiurban,
    Urban,
}

impl PropertyArea {
    pub const fn ordered() -> [Self; 3] {
        [Self::Rural, Self::Semiurban, Self::Urban]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Semiurban => "Semi-urban",
            Self::Urban => "Urban",
        }
    }

    pub const fn is_semiurban(self) -> bool {
        matches!(self, Self::Semiurban)
    }

    pub const fn is_urban(self) -> bool {
        matches!(self, Self::Urban)
    }
}

/// Number of dependents, as the one-hot `Dependents_*` group.
///
/// `None` is the implicit category where every indicator is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependentsCategory {
    #[default]
    None,
    One,
    Two,
    Three,
    ThreePlus,
}

impl DependentsCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::None,
            Self::One,
            Self::Two,
            Self::Three,
            Self::ThreePlus,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::ThreePlus => "3+",
        }
    }

    /// Position-weighted sum of the indicators: 1, 2, 3 for the literal counts and 4 for
    /// "3+".
    pub fn count(self) -> u8 {
        self.indicators()
            .iter()
            .zip(1u8..)
            .filter(|(flag, _)| **flag)
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Indicators in `Dependents_1`, `Dependents_2`, `Dependents_3`, `Dependents_3+` order.
    pub const fn indicators(self) -> [bool; 4] {
        match self {
            Self::None => [false, false, false, false],
            Self::One => [true, false, false, false],
            Self::Two => [false, true, false, false],
            Self::Three => [false, false, true, false],
            Self::ThreePlus => [false, false, false, true],
        }
    }
}

/// Raw applicant attributes for one submission.
///
/// Amounts are expected to be non-negative; the front ends enforce that before a record is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: f64,
    pub credit_history_good: bool,
    pub gender_male: bool,
    pub married: bool,
    pub not_graduate: bool,
    pub self_employed: bool,
    pub property_area: PropertyArea,
    pub dependents: DependentsCategory,
}
