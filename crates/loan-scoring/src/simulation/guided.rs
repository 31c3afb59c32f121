//! Guided simulation: a home page, then a form of labelled choices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalogue::{Choice, FieldSpec, FormCatalogue};
use super::{checked_amount, FormError};
use crate::scoring::{
    ApplicantRecord, DependentsCategory, LoanAssessment, LoanVerdict, PropertyArea,
};

/// Repayment durations offered by the guided form, in years.
pub const LOAN_TERMS_YEARS: [u16; 6] = [7, 10, 15, 20, 25, 30];

/// Page shown by the guided front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationPage {
    #[default]
    Home,
    Simulation,
}

impl SimulationPage {
    pub const fn start(self) -> Self {
        Self::Simulation
    }

    pub const fn back(self) -> Self {
        Self::Home
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditHistoryChoice {
    #[default]
    Good,
    Problems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderChoice {
    #[default]
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationChoice {
    #[default]
    Graduate,
    NotGraduate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentChoice {
    #[default]
    Salaried,
    SelfEmployed,
}

impl Choice for CreditHistoryChoice {
    fn ordered() -> &'static [Self] {
        &[Self::Good, Self::Problems]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Good => "Good history",
            Self::Problems => "Credit problems",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Problems => 0,
        }
    }
}

impl Choice for GenderChoice {
    fn ordered() -> &'static [Self] {
        &[Self::Female, Self::Male]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }
}

impl Choice for MaritalStatus {
    fn ordered() -> &'static [Self] {
        &[Self::Single, Self::Married]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Single => 0,
            Self::Married => 1,
        }
    }
}

impl Choice for EducationChoice {
    fn ordered() -> &'static [Self] {
        &[Self::Graduate, Self::NotGraduate]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Graduate => "Graduate",
            Self::NotGraduate => "Not graduate",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Graduate => 0,
            Self::NotGraduate => 1,
        }
    }
}

impl Choice for EmploymentChoice {
    fn ordered() -> &'static [Self] {
        &[Self::Salaried, Self::SelfEmployed]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::SelfEmployed => "Self-employed",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Salaried => 0,
            Self::SelfEmployed => 1,
        }
    }
}

/// Submission of the guided simulation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidedForm {
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_years: u16,
    #[serde(default)]
    pub credit_history: CreditHistoryChoice,
    #[serde(default)]
    pub gender: GenderChoice,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub education: EducationChoice,
    #[serde(default)]
    pub employment: EmploymentChoice,
    #[serde(default)]
    pub property_area: PropertyArea,
    #[serde(default)]
    pub dependents: DependentsCategory,
}

impl GuidedForm {
    pub fn loan_term_months(&self) -> Result<u16, FormError> {
        if LOAN_TERMS_YEARS.contains(&self.loan_term_years) {
            Ok(self.loan_term_years * 12)
        } else {
            Err(FormError::UnsupportedTerm {
                value: self.loan_term_years,
                allowed: &LOAN_TERMS_YEARS,
            })
        }
    }

    pub fn into_record(self) -> Result<ApplicantRecord, FormError> {
        Ok(ApplicantRecord {
            applicant_income: checked_amount("applicant_income", self.applicant_income)?,
            coapplicant_income: checked_amount("coapplicant_income", self.coapplicant_income)?,
            loan_amount: checked_amount("loan_amount", self.loan_amount)?,
            loan_term_months: f64::from(self.loan_term_months()?),
            credit_history_good: self.credit_history.code() == 1,
            gender_male: self.gender.code() == 1,
            married: self.marital_status.code() == 1,
            not_graduate: self.education.code() == 1,
            self_employed: self.employment.code() == 1,
            property_area: self.property_area,
            dependents: self.dependents,
        })
    }
}

/// Field layout of the guided form.
pub fn catalogue() -> FormCatalogue {
    FormCatalogue {
        fields: vec![
            FieldSpec::amount("applicant_income", "Applicant monthly income (€)", 100.0)
                .with_help("Your net monthly income"),
            FieldSpec::amount("coapplicant_income", "Co-applicant monthly income (€)", 100.0)
                .with_help("Net monthly income of your spouse or partner, if applicable"),
            FieldSpec::amount("loan_amount", "Desired loan amount (€)", 1000.0)
                .with_help("Total amount you wish to borrow"),
            FieldSpec::term("loan_term_years", "Loan term (years)", "years", &LOAN_TERMS_YEARS)
                .with_help("Repayment duration of the loan"),
            FieldSpec::choice::<CreditHistoryChoice>("credit_history", "Credit history")
                .with_help("Do you have a good record of repaying credit?"),
            FieldSpec::choice::<GenderChoice>("gender", "Gender"),
            FieldSpec::choice::<MaritalStatus>("marital_status", "Marital status"),
            FieldSpec::choice::<EducationChoice>("education", "Education level"),
            FieldSpec::choice::<EmploymentChoice>("employment", "Employment status"),
            FieldSpec::choice::<PropertyArea>("property_area", "Property location"),
            FieldSpec::choice::<DependentsCategory>("dependents", "Dependents"),
        ],
    }
}

const HOME_TITLE: &str = "Youbank - Home Loan Simulation";
const SIMULATION_TITLE: &str = "Home Loan Simulation";

/// Content of the guided front end's pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home {
        title: &'static str,
        welcome: &'static str,
        required_information: Vec<&'static str>,
        next: SimulationPage,
    },
    Simulation {
        title: &'static str,
        instructions: &'static str,
        form: FormCatalogue,
        back: SimulationPage,
    },
}

impl PageView {
    pub fn for_page(page: SimulationPage) -> Self {
        match page {
            SimulationPage::Home => Self::Home {
                title: HOME_TITLE,
                welcome: "Welcome to our home loan simulator. Get an instant estimate of your \
                          eligibility for a home loan in a few clicks.",
                required_information: vec![
                    "Monthly income",
                    "Desired loan amount",
                    "Repayment duration",
                    "Credit history",
                    "Family and professional situation",
                ],
                next: page.start(),
            },
            SimulationPage::Simulation => Self::Simulation {
                title: SIMULATION_TITLE,
                instructions: "Fill in the form below with your information. All fields are \
                               required.",
                form: catalogue(),
                back: page.back(),
            },
        }
    }
}

const RECOMMENDATIONS: [&str; 4] = [
    "Increase your personal contribution",
    "Reduce the requested loan amount",
    "Improve your credit score",
    "Choose a longer repayment term",
];

const ADVISOR_NOTE: &str = "Our advisors are at your disposal. Book an appointment with one of \
                            our financial advisors for a more detailed review of your project.";

/// Response of the guided simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidedDecisionView {
    pub verdict: LoanVerdict,
    pub headline: &'static str,
    pub explanation: &'static str,
    pub probability: f64,
    pub probability_display: String,
    pub progress: u8,
    pub loan_term_months: u16,
    /// Only filled in for rejected applications.
    pub recommendations: Vec<&'static str>,
    pub advisor_note: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted_columns: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl GuidedDecisionView {
    pub fn from_assessment(
        assessment: LoanAssessment,
        loan_term_months: u16,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let (headline, explanation, recommendations) = match assessment.verdict {
            LoanVerdict::Accepted => (
                "Congratulations! Your loan is pre-approved",
                "Based on the information provided, you have a strong chance of obtaining \
                 your home loan.",
                Vec::new(),
            ),
            LoanVerdict::Rejected => (
                "Unfortunately, your profile does not meet our criteria",
                "Based on the information provided, we cannot approve your loan request \
                 under the current conditions.",
                RECOMMENDATIONS.to_vec(),
            ),
        };

        Self {
            verdict: assessment.verdict,
            headline,
            explanation,
            probability: assessment.probability,
            probability_display: assessment.probability_display(),
            progress: assessment.progress(),
            loan_term_months,
            recommendations,
            advisor_note: ADVISOR_NOTE,
            defaulted_columns: assessment.defaulted_columns,
            evaluated_at,
        }
    }
}
