use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::scoring::columns;
use crate::scoring::{
    ApplicantRecord, Classifier, DependentsCategory, FeatureOrder, InferenceError, LoanClass,
    LoanScorer, PropertyArea, Scaler,
};

/// Applicant from the reference scenario: 5000 income, 150000 over 360 months.
pub(super) fn baseline_record() -> ApplicantRecord {
    ApplicantRecord {
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 150_000.0,
        loan_term_months: 360.0,
        credit_history_good: true,
        gender_male: false,
        married: false,
        not_graduate: false,
        self_employed: false,
        property_area: PropertyArea::Rural,
        dependents: DependentsCategory::None,
    }
}

/// Input columns followed by derived columns, as the training frame was laid out.
pub(super) fn training_order() -> FeatureOrder {
    FeatureOrder::new(
        columns::INPUT_COLUMNS
            .iter()
            .chain(columns::DERIVED_COLUMNS.iter())
            .copied(),
    )
}

/// Scaler that records its calls and returns the input unchanged.
#[derive(Default, Clone)]
pub(super) struct PassthroughScaler {
    pub(super) calls: Arc<AtomicUsize>,
}

impl Scaler for PassthroughScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(features.to_vec())
    }
}

/// Classifier returning a fixed label and probability.
#[derive(Clone)]
pub(super) struct FixedClassifier {
    pub(super) class: LoanClass,
    pub(super) probability: f64,
    pub(super) predict_calls: Arc<AtomicUsize>,
    pub(super) proba_calls: Arc<AtomicUsize>,
}

impl FixedClassifier {
    pub(super) fn new(class: LoanClass, probability: f64) -> Self {
        Self {
            class,
            probability,
            predict_calls: Arc::default(),
            proba_calls: Arc::default(),
        }
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &[f64]) -> Result<LoanClass, InferenceError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.class)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64, InferenceError> {
        self.proba_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.probability)
    }
}

pub(super) fn stub_scorer(
    class: LoanClass,
    probability: f64,
) -> LoanScorer<PassthroughScaler, FixedClassifier> {
    LoanScorer::new(
        PassthroughScaler::default(),
        FixedClassifier::new(class, probability),
        training_order(),
    )
    .expect("stub scorer is consistent")
}
