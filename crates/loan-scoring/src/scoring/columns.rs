//! Column names of the classifier's training frame.

pub const APPLICANT_INCOME: &str = "ApplicantIncome_capped";
pub const COAPPLICANT_INCOME: &str = "CoapplicantIncome_capped";
pub const LOAN_AMOUNT: &str = "LoanAmount";
pub const LOAN_AMOUNT_TERM: &str = "Loan_Amount_Term";
pub const CREDIT_HISTORY: &str = "Credit_History";
pub const GENDER_MALE: &str = "Gender_Male";
pub const MARRIED_YES: &str = "Married_Yes";
pub const EDUCATION_NOT_GRADUATE: &str = "Education_Not Graduate";
pub const SELF_EMPLOYED_YES: &str = "Self_Employed_Yes";
pub const PROPERTY_AREA_SEMIURBAN: &str = "Property_Area_Semiurban";
pub const PROPERTY_AREA_URBAN: &str = "Property_Area_Urban";
pub const DEPENDENTS_1: &str = "Dependents_1";
pub const DEPENDENTS_2: &str = "Dependents_2";
pub const DEPENDENTS_3: &str = "Dependents_3";
pub const DEPENDENTS_3_PLUS: &str = "Dependents_3+";

pub const TOTAL_INCOME: &str = "TotalIncome";
pub const DEPENDENTS: &str = "Dependents";
pub const CHARGE_TOTALE: &str = "Charge_totale";
pub const INCOME_TO_CHARGE: &str = "Income_to_Charge";
pub const RURAL: &str = "Rural";

/// Columns collected from the applicant, in form order.
pub const INPUT_COLUMNS: [&str; 15] = [
    APPLICANT_INCOME,
    COAPPLICANT_INCOME,
    LOAN_AMOUNT,
    LOAN_AMOUNT_TERM,
    CREDIT_HISTORY,
    GENDER_MALE,
    MARRIED_YES,
    EDUCATION_NOT_GRADUATE,
    SELF_EMPLOYED_YES,
    PROPERTY_AREA_SEMIURBAN,
    PROPERTY_AREA_URBAN,
    DEPENDENTS_1,
    DEPENDENTS_2,
    DEPENDENTS_3,
    DEPENDENTS_3_PLUS,
];

/// Columns computed by the feature deriver.
pub const DERIVED_COLUMNS: [&str; 5] = [
    TOTAL_INCOME,
    DEPENDENTS,
    CHARGE_TOTALE,
    INCOME_TO_CHARGE,
    RURAL,
];
