//! End-to-end scenarios through the public scoring API and the HTTP front ends.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use loan_scoring::config::ArtifactConfig;
use loan_scoring::scoring::{
    columns, derive, ApplicantRecord, Classifier, DependentsCategory, FeatureOrder,
    InferenceError, LoanClass, LoanScorer, LoanVerdict, PropertyArea, Scaler, ScorerCache,
};
use loan_scoring::simulation::{simulation_router, QuickForm};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct Unscaled;

impl Scaler for Unscaled {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        Ok(features.to_vec())
    }
}

struct Fixed(LoanClass, f64);

impl Classifier for Fixed {
    fn predict(&self, _features: &[f64]) -> Result<LoanClass, InferenceError> {
        Ok(self.0)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64, InferenceError> {
        Ok(self.1)
    }
}

fn reference_applicant(credit_history_good: bool) -> ApplicantRecord {
    ApplicantRecord {
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 150_000.0,
        loan_term_months: 360.0,
        credit_history_good,
        gender_male: false,
        married: false,
        not_graduate: false,
        self_employed: false,
        property_area: PropertyArea::Rural,
        dependents: DependentsCategory::None,
    }
}

fn full_order() -> FeatureOrder {
    FeatureOrder::new(
        columns::INPUT_COLUMNS
            .iter()
            .chain(columns::DERIVED_COLUMNS.iter())
            .copied(),
    )
}

#[test]
fn reference_applicant_with_good_credit_is_accepted() {
    let record = reference_applicant(true);
    let features = derive(&record);
    assert_eq!(features.derived.dependents, 0);
    assert!(features.derived.rural);
    assert_eq!(features.derived.total_income, 5000.0);
    assert_eq!(features.derived.charge_totale, 0.0);
    assert_eq!(features.derived.income_to_charge, 5000.0);

    let scorer = LoanScorer::new(Unscaled, Fixed(LoanClass::Accept, 0.82), full_order())
        .expect("scorer builds");
    let assessment = scorer.assess(&record).expect("assessment succeeds");

    assert_eq!(assessment.verdict, LoanVerdict::Accepted);
    assert_eq!(assessment.verdict.label(), "Accepted");
    assert_eq!(assessment.probability_display(), "82.0%");
}

#[test]
fn reference_applicant_with_poor_credit_is_rejected() {
    let scorer = LoanScorer::new(Unscaled, Fixed(LoanClass::Reject, 0.2), full_order())
        .expect("scorer builds");

    let assessment = scorer
        .assess(&reference_applicant(false))
        .expect("assessment succeeds");

    assert_eq!(assessment.verdict, LoanVerdict::Rejected);
    assert_eq!(assessment.verdict.label(), "Rejected");
    assert_eq!(assessment.probability_display(), "20.0%");
}

fn write_exports(dir: &Path) {
    let order: Vec<&str> = columns::INPUT_COLUMNS
        .iter()
        .chain(columns::DERIVED_COLUMNS.iter())
        .copied()
        .collect();
    let width = order.len();
    let credit_index = order
        .iter()
        .position(|column| *column == columns::CREDIT_HISTORY)
        .expect("credit history column present");

    let mut coefficients = vec![0.0; width];
    coefficients[credit_index] = 4.0;
    let mut mean = vec![0.0; width];
    mean[credit_index] = 0.5;
    let mut scale = vec![1.0; width];
    scale[credit_index] = 0.5;

    fs::write(dir.join("features.json"), json!(order).to_string()).expect("features written");
    fs::write(
        dir.join("scaler.json"),
        json!({ "mean": mean, "scale": scale }).to_string(),
    )
    .expect("scaler written");
    fs::write(
        dir.join("model.json"),
        json!({ "coefficients": coefficients, "intercept": 0.0 }).to_string(),
    )
    .expect("model written");
}

async fn predict(router: axum::Router, form: &QuickForm) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::post("/api/v1/quick/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(form).expect("serializes")))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn reference_form(credit_history: u8) -> QuickForm {
    QuickForm {
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 150_000.0,
        loan_term_months: 360,
        credit_history,
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

#[tokio::test]
async fn exported_artifacts_score_through_the_router() {
    let dir = TempDir::new().expect("temp dir");
    write_exports(dir.path());
    let cache = Arc::new(ScorerCache::from_paths(
        ArtifactConfig::in_directory(dir.path()).paths(),
    ));
    let router = simulation_router(cache.clone());

    let (status, body) = predict(router.clone(), &reference_form(1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Accepted");
    assert!(cache.is_loaded());

    let (status, body) = predict(router, &reference_form(0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Rejected");
}

#[tokio::test]
async fn missing_artifacts_halt_scoring() {
    let dir = TempDir::new().expect("temp dir");
    let cache = Arc::new(ScorerCache::from_paths(
        ArtifactConfig::in_directory(dir.path()).paths(),
    ));
    let router = simulation_router(cache.clone());

    let (status, body) = predict(router.clone(), &reference_form(1)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("model.json"));

    let (status, _) = predict(router, &reference_form(1)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!cache.is_loaded());
}
