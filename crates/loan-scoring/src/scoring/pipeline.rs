use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use super::adapter::{prepare, FeatureOrder};
use super::artifacts::ArtifactError;
use super::domain::ApplicantRecord;
use super::features::{derive, DerivedFeatures};
use super::model::{Classifier, InferenceError, Scaler};
use super::presentation::{format_probability, progress_percent, LoanVerdict};

/// Scaler, classifier and column order that together score an application.
#[derive(Debug)]
pub struct LoanScorer<S, C> {
    scaler: S,
    classifier: C,
    order: FeatureOrder,
}

impl<S, C> LoanScorer<S, C>
where
    S: Scaler,
    C: Classifier,
{
    /// Reject orders that are empty or repeat a column, and components whose known width
    /// differs from the order.
    pub fn new(scaler: S, classifier: C, order: FeatureOrder) -> Result<Self, ArtifactError> {
        if order.is_empty() {
            return Err(ArtifactError::EmptyFeatureOrder);
        }

        if let Some(column) = first_repeated(&order) {
            return Err(ArtifactError::DuplicateColumn(column));
        }

        let widths = [("scaler", scaler.width()), ("classifier", classifier.width())];
        for (artifact, width) in widths {
            match width {
                Some(actual) if actual != order.len() => {
                    return Err(ArtifactError::WidthMismatch {
                        artifact,
                        expected: order.len(),
                        actual,
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            scaler,
            classifier,
            order,
        })
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        &self.order
    }

    /// Derive, align, scale and classify one application.
    pub fn assess(&self, record: &ApplicantRecord) -> Result<LoanAssessment, InferenceError> {
        let features = derive(record);
        let vector = prepare(&features, &self.order);

        let scaled = self.scaler.transform(&vector.values)?;
        if scaled.len() != vector.width() {
            return Err(InferenceError::WidthMismatch {
                expected: vector.width(),
                actual: scaled.len(),
            });
        }

        let class = self.classifier.predict(&scaled)?;
        let probability = self.classifier.predict_proba(&scaled)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(InferenceError::InvalidProbability(probability));
        }

        let verdict = LoanVerdict::from(class);
        info!(
            verdict = verdict.label(),
            probability,
            defaulted = vector.defaulted.len(),
            "loan application assessed"
        );

        Ok(LoanAssessment {
            verdict,
            probability,
            derived: features.derived,
            defaulted_columns: vector.defaulted,
        })
    }
}

fn first_repeated(order: &FeatureOrder) -> Option<String> {
    let mut seen = HashSet::with_capacity(order.len());
    order
        .columns()
        .iter()
        .find(|column| !seen.insert(column.as_str()))
        .cloned()
}

/// Outcome of a single assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanAssessment {
    pub verdict: LoanVerdict,
    /// Probability of acceptance in `[0, 1]`.
    pub probability: f64,
    pub derived: DerivedFeatures,
    pub defaulted_columns: Vec<String>,
}

impl LoanAssessment {
    pub fn probability_display(&self) -> String {
        format_probability(self.probability)
    }

    pub fn progress(&self) -> u8 {
        progress_percent(self.probability)
    }
}
