//! Form front ends feeding the shared scoring core.
//!
//! [`quick`] takes every classifier input as a raw code, [`guided`] walks the applicant through
//! labelled choices. Both only collect and present; derivation and inference live in
//! [`crate::scoring`].

mod catalogue;
pub mod guided;
pub mod quick;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalogue::{Choice, ChoiceOption, FieldKind, FieldSpec, FormCatalogue};
pub use guided::{GuidedDecisionView, GuidedForm, PageView, SimulationPage};
pub use quick::{QuickDecisionView, QuickForm};
pub use router::simulation_router;

/// Input rejected by a front end before it reaches the scoring core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{field} must be a finite amount of at least 0, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("{field} must be 0 or 1, got {value}")]
    InvalidIndicator { field: &'static str, value: u8 },
    #[error("loan term {value} is not offered; choose one of {allowed:?}")]
    UnsupportedTerm { value: u16, allowed: &'static [u16] },
    #[error("select at most one dependents category")]
    ConflictingDependents,
    #[error("a property cannot be both semi-urban and urban")]
    ConflictingPropertyArea,
}

pub(crate) fn checked_amount(field: &'static str, value: f64) -> Result<f64, FormError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FormError::InvalidAmount { field, value })
    }
}
