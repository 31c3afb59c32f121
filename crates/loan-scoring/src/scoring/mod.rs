//! Shared scoring core used by both form front ends.
//!
//! The flow is strictly forward: an [`ApplicantRecord`] is expanded by [`derive`], aligned to
//! the classifier's [`FeatureOrder`] by [`prepare`], and pushed through a [`Scaler`] and a
//! [`Classifier`] by [`LoanScorer`].

mod adapter;
mod artifacts;
pub mod columns;
mod domain;
mod features;
mod model;
mod pipeline;
mod presentation;

#[cfg(test)]
mod tests;

pub use adapter::{prepare, FeatureOrder, FeatureVector};
pub use artifacts::{
    load_artifacts, ArtifactError, ArtifactPaths, ArtifactScorer, ModelExport, ScalerExport,
    ScorerCache,
};
pub use domain::{ApplicantRecord, DependentsCategory, PropertyArea};
pub use features::{derive, DerivedFeatures, EngineeredFeatures, CHARGE_PER_DEPENDENT};
pub use model::{Classifier, InferenceError, LoanClass, LogisticRegression, Scaler, StandardScaler};
pub use pipeline::{LoanAssessment, LoanScorer};
pub use presentation::{format_probability, progress_percent, LoanVerdict};
