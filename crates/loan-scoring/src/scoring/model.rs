use serde::{Deserialize, Serialize};

/// Predicted class of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanClass {
    Reject,
    Accept,
}

impl LoanClass {
    pub const fn code(self) -> u8 {
        match self {
            Self::Reject => 0,
            Self::Accept => 1,
        }
    }
}

/// Error raised while transforming or classifying a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("expected {expected} features, received {actual}")]
    WidthMismatch { expected: usize, actual: usize },
    #[error("classifier produced probability {0} outside [0, 1]")]
    InvalidProbability(f64),
    #[error("inference backend failed: {0}")]
    Backend(String),
}

/// Fitted normalization applied before classification.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Number of columns the scaler was fitted on, when known.
    fn width(&self) -> Option<usize> {
        None
    }
}

/// Trained binary classifier.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<LoanClass, InferenceError>;

    /// Probability of [`LoanClass::Accept`].
    fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError>;

    fn width(&self) -> Option<usize> {
        None
    }
}

fn check_width(expected: usize, features: &[f64]) -> Result<(), InferenceError> {
    if features.len() == expected {
        Ok(())
    } else {
        Err(InferenceError::WidthMismatch {
            expected,
            actual: features.len(),
        })
    }
}

/// Per-column standardization, `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Returns `None` when `mean` and `scale` differ in length.
    ///
    /// A zero scale entry is replaced with 1 so constant columns pass through centred.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Option<Self> {
        if mean.len() != scale.len() {
            return None;
        }
        let scale = scale
            .into_iter()
            .map(|value| if value == 0.0 { 1.0 } else { value })
            .collect();
        Some(Self { mean, scale })
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        check_width(self.mean.len(), features)?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| (value - mean) / scale)
            .collect())
    }

    fn width(&self) -> Option<usize> {
        Some(self.mean.len())
    }
}

/// Linear model with a logistic link.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LogisticRegression {
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn decision_function(&self, features: &[f64]) -> Result<f64, InferenceError> {
        check_width(self.coefficients.len(), features)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(weight, value)| weight * value)
            .sum();
        Ok(dot + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &[f64]) -> Result<LoanClass, InferenceError> {
        let probability = self.predict_proba(features)?;
        Ok(if probability >= self.threshold {
            LoanClass::Accept
        } else {
            LoanClass::Reject
        })
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError> {
        self.decision_function(features).map(sigmoid)
    }

    fn width(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}
