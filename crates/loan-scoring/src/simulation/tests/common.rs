use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::scoring::columns;
use crate::scoring::{
    Classifier, DependentsCategory, FeatureOrder, InferenceError, LoanClass, LoanScorer,
    PropertyArea, Scaler, ScorerCache,
};
use crate::simulation::guided::{
    CreditHistoryChoice, EducationChoice, EmploymentChoice, GenderChoice, MaritalStatus,
};
use crate::simulation::{GuidedForm, QuickForm};

pub(super) struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        Ok(features.to_vec())
    }
}

/// Accepts exactly when the credit history column is 1.
pub(super) struct CreditHistoryClassifier {
    pub(super) accepted: f64,
    pub(super) rejected: f64,
}

impl CreditHistoryClassifier {
    fn good_credit(features: &[f64]) -> bool {
        features.first().copied() == Some(1.0)
    }
}

impl Classifier for CreditHistoryClassifier {
    fn predict(&self, features: &[f64]) -> Result<LoanClass, InferenceError> {
        Ok(if Self::good_credit(features) {
            LoanClass::Accept
        } else {
            LoanClass::Reject
        })
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError> {
        Ok(if Self::good_credit(features) {
            self.accepted
        } else {
            self.rejected
        })
    }
}

pub(super) type StubCache = ScorerCache<IdentityScaler, CreditHistoryClassifier>;

pub(super) fn stub_cache() -> Arc<StubCache> {
    let order = FeatureOrder::new([
        columns::CREDIT_HISTORY,
        columns::TOTAL_INCOME,
        columns::LOAN_AMOUNT_TERM,
        columns::RURAL,
    ]);
    let scorer = LoanScorer::new(
        IdentityScaler,
        CreditHistoryClassifier {
            accepted: 0.82,
            rejected: 0.2,
        },
        order,
    )
    .expect("stub scorer is consistent");
    Arc::new(ScorerCache::preloaded(scorer))
}

pub(super) fn quick_form() -> QuickForm {
    QuickForm {
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 150_000.0,
        loan_term_months: 360,
        credit_history: 1,
        gender_male: 0,
        married: 0,
        education_not_graduate: 0,
        self_employed: 0,
        property_area_semiurban: 0,
        property_area_urban: 0,
        dependents_1: 0,
        dependents_2: 0,
        dependents_3: 0,
        dependents_3_plus: 0,
    }
}

pub(super) fn guided_form() -> GuidedForm {
    GuidedForm {
        applicant_income: 3200.0,
        coapplicant_income: 1800.0,
        loan_amount: 210_000.0,
        loan_term_years: 25,
        credit_history: CreditHistoryChoice::Good,
        gender: GenderChoice::Male,
        marital_status: MaritalStatus::Married,
        education: EducationChoice::Graduate,
        employment: EmploymentChoice::Salaried,
        property_area: PropertyArea::Semiurban,
        dependents: DependentsCategory::Two,
    }
}

pub(super) fn json_post(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("body serializes")))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
