use serde::{Deserialize, Serialize};

use super::columns;
use super::domain::ApplicantRecord;

/// Fixed monthly charge attributed to each dependent.
pub const CHARGE_PER_DEPENDENT: f64 = 500.0;

/// Features computed from an [`ApplicantRecord`]; never supplied by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub total_income: f64,
    /// Sum of the dependents indicators. `4` stands for the "3+" category.
    pub dependents: u8,
    pub charge_totale: f64,
    pub income_to_charge: f64,
    pub rural: bool,
}

/// An applicant record merged with its derived features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeredFeatures {
    pub record: ApplicantRecord,
    pub derived: DerivedFeatures,
}

/// Compute the derived features for `record`.
pub fn derive(record: &ApplicantRecord) -> EngineeredFeatures {
    let total_income = record.applicant_income + record.coapplicant_income;
    let dependents = record.dependents.count();
    let charge_totale = f64::from(dependents) * CHARGE_PER_DEPENDENT;
    let income_to_charge = total_income / (1.0 + charge_totale);
    let rural = !record.property_area.is_semiurban() && !record.property_area.is_urban();

    EngineeredFeatures {
        record: *record,
        derived: DerivedFeatures {
            total_income,
            dependents,
            charge_totale,
            income_to_charge,
            rural,
        },
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

impl EngineeredFeatures {
    /// Value of the named classifier column, or `None` when this record does not supply it.
    pub fn value(&self, column: &str) -> Option<f64> {
        let record = &self.record;
        let derived = &self.derived;
        let [dependents_1, dependents_2, dependents_3, dependents_3_plus] =
            record.dependents.indicators();

        let value = match column {
            columns::APPLICANT_INCOME => record.applicant_income,
            columns::COAPPLICANT_INCOME => record.coapplicant_income,
            columns::LOAN_AMOUNT => record.loan_amount,
            columns::LOAN_AMOUNT_TERM => record.loan_term_months,
            columns::CREDIT_HISTORY => indicator(record.credit_history_good),
            columns::GENDER_MALE => indicator(record.gender_male),
            columns::MARRIED_YES => indicator(record.married),
            columns::EDUCATION_NOT_GRADUATE => indicator(record.not_graduate),
            columns::SELF_EMPLOYED_YES => indicator(record.self_employed),
            columns::PROPERTY_AREA_SEMIURBAN => indicator(record.property_area.is_semiurban()),
            columns::PROPERTY_AREA_URBAN => indicator(record.property_area.is_urban()),
            columns::DEPENDENTS_1 => indicator(dependents_1),
            columns::DEPENDENTS_2 => indicator(dependents_2),
            columns::DEPENDENTS_3 => indicator(dependents_3),
            columns::DEPENDENTS_3_PLUS => indicator(dependents_3_plus),
            columns::TOTAL_INCOME => derived.total_income,
            columns::DEPENDENTS => f64::from(derived.dependents),
            columns::CHARGE_TOTALE => derived.charge_totale,
            columns::INCOME_TO_CHARGE => derived.income_to_charge,
            columns::RURAL => indicator(derived.rural),
            _ => return None,
        };

        Some(value)
    }
}
