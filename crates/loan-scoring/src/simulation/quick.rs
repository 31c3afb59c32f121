//! Direct form: every classifier input entered as an amount or a 0/1 code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalogue::{ChoiceOption, FieldKind, FieldSpec, FormCatalogue};
use super::{checked_amount, FormError};
use crate::scoring::{
    ApplicantRecord, DependentsCategory, LoanAssessment, LoanVerdict, PropertyArea,
};

/// Loan terms offered by the direct form, in months.
pub const LOAN_TERMS_MONTHS: [u16; 3] = [90, 180, 360];

/// Raw submission of the direct form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickForm {
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u16,
    #[serde(default)]
    pub credit_history: u8,
    #[serde(default)]
    pub gender_male: u8,
    #[serde(default)]
    pub married: u8,
    #[serde(default)]
    pub education_not_graduate: u8,
    #[serde(default)]
    pub self_employed: u8,
    #[serde(default)]
    pub property_area_semiurban: u8,
    #[serde(default)]
    pub property_area_urban: u8,
    #[serde(default)]
    pub dependents_1: u8,
    #[serde(default)]
    pub dependents_2: u8,
    #[serde(default)]
    pub dependents_3: u8,
    #[serde(default)]
    pub dependents_3_plus: u8,
}

fn flag(field: &'static str, value: u8) -> Result<bool, FormError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(FormError::InvalidIndicator { field, value }),
    }
}

impl QuickForm {
    /// Check every code and collapse the one-hot groups into their categories.
    pub fn into_record(self) -> Result<ApplicantRecord, FormError> {
        let record = self.validate();
        if let Err(err) = &record {
            debug!(error = %err, "direct form rejected");
        }
        record
    }

    fn validate(&self) -> Result<ApplicantRecord, FormError> {
        if !LOAN_TERMS_MONTHS.contains(&self.loan_term_months) {
            return Err(FormError::UnsupportedTerm {
                value: self.loan_term_months,
                allowed: &LOAN_TERMS_MONTHS,
            });
        }

        let semiurban = flag("property_area_semiurban", self.property_area_semiurban)?;
        let urban = flag("property_area_urban", self.property_area_urban)?;
        let property_area = match (semiurban, urban) {
            (false, false) => PropertyArea::Rural,
            (true, false) => PropertyArea::Semiurban,
            (false, true) => PropertyArea::Urban,
            (true, true) => return Err(FormError::ConflictingPropertyArea),
        };

        let dependents_flags = [
            flag("dependents_1", self.dependents_1)?,
            flag("dependents_2", self.dependents_2)?,
            flag("dependents_3", self.dependents_3)?,
            flag("dependents_3_plus", self.dependents_3_plus)?,
        ];
        let dependents = match dependents_flags {
            [false, false, false, false] => DependentsCategory::None,
            [true, false, false, false] => DependentsCategory::One,
            [false, true, false, false] => DependentsCategory::Two,
            [false, false, true, false] => DependentsCategory::Three,
            [false, false, false, true] => DependentsCategory::ThreePlus,
            _ => return Err(FormError::ConflictingDependents),
        };

        Ok(ApplicantRecord {
            applicant_income: checked_amount("applicant_income", self.applicant_income)?,
            coapplicant_income: checked_amount("coapplicant_income", self.coapplicant_income)?,
            loan_amount: checked_amount("loan_amount", self.loan_amount)?,
            loan_term_months: f64::from(self.loan_term_months),
            credit_history_good: flag("credit_history", self.credit_history)?,
            gender_male: flag("gender_male", self.gender_male)?,
            married: flag("married", self.married)?,
            not_graduate: flag("education_not_graduate", self.education_not_graduate)?,
            self_employed: flag("self_employed", self.self_employed)?,
            property_area,
            dependents,
        })
    }
}

/// Field layout of the direct form.
pub fn catalogue() -> FormCatalogue {
    let binary = || FieldKind::Choice {
        options: vec![
            ChoiceOption { label: "0", code: 0 },
            ChoiceOption { label: "1", code: 1 },
        ],
    };
    let indicator = |name: &'static str, label: &'static str| FieldSpec {
        name,
        label,
        help: None,
        kind: binary(),
    };

    FormCatalogue {
        fields: vec![
            FieldSpec::amount("applicant_income", "Applicant income (capped)", 100.0),
            FieldSpec::amount("coapplicant_income", "Co-applicant income (capped)", 100.0),
            FieldSpec::amount("loan_amount", "Loan amount", 100.0),
            FieldSpec::term(
                "loan_term_months",
                "Loan term (months)",
                "months",
                &LOAN_TERMS_MONTHS,
            ),
            indicator("credit_history", "Credit history"),
            indicator("gender_male", "Gender male"),
            indicator("married", "Married"),
            indicator("education_not_graduate", "Education not graduate"),
            indicator("self_employed", "Self employed"),
            indicator("property_area_semiurban", "Property area semi-urban"),
            indicator("property_area_urban", "Property area urban"),
            indicator("dependents_1", "Dependents 1"),
            indicator("dependents_2", "Dependents 2"),
            indicator("dependents_3", "Dependents 3"),
            indicator("dependents_3_plus", "Dependents 3+"),
        ],
    }
}

/// Response of the direct form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickDecisionView {
    pub verdict: LoanVerdict,
    pub label: &'static str,
    pub probability: f64,
    pub probability_display: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted_columns: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl QuickDecisionView {
    pub fn from_assessment(assessment: LoanAssessment, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            verdict: assessment.verdict,
            label: assessment.verdict.label(),
            probability: assessment.probability,
            probability_display: assessment.probability_display(),
            progress: assessment.progress(),
            defaulted_columns: assessment.defaulted_columns,
            evaluated_at,
        }
    }
}
