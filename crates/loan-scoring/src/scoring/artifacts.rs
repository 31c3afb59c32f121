use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::adapter::FeatureOrder;
use super::model::{Classifier, LogisticRegression, Scaler, StandardScaler};
use super::pipeline::LoanScorer;

/// Scorer backed by the JSON exports read from disk.
pub type ArtifactScorer = LoanScorer<StandardScaler, LogisticRegression>;

/// Files holding the exported classifier, scaler and column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub features: PathBuf,
}

/// JSON export of a fitted logistic regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelExport {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// JSON export of a fitted standard scaler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerExport {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Failure to load or reconcile the model artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact {path} is not valid JSON for this model: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("feature order is empty")]
    EmptyFeatureOrder,
    #[error("feature order lists column '{0}' more than once")]
    DuplicateColumn(String),
    #[error("scaler export has {mean} means but {scale} scales")]
    ScalerShape { mean: usize, scale: usize },
    #[error("{artifact} expects {actual} features but the feature order has {expected}")]
    WidthMismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("no artifact loader configured")]
    Unconfigured,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the three exports and assemble a scorer, checking that their widths agree.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<ArtifactScorer, ArtifactError> {
    let model: ModelExport = read_json(&paths.model)?;
    let scaler: ScalerExport = read_json(&paths.scaler)?;
    let order: FeatureOrder = read_json(&paths.features)?;

    let (mean, scale) = (scaler.mean.len(), scaler.scale.len());
    let scaler = StandardScaler::new(scaler.mean, scaler.scale)
        .ok_or(ArtifactError::ScalerShape { mean, scale })?;

    let mut classifier = LogisticRegression::new(model.coefficients, model.intercept);
    if let Some(threshold) = model.threshold {
        classifier = classifier.with_threshold(threshold);
    }

    LoanScorer::new(scaler, classifier, order)
}

type Loader<S, C> = Box<dyn Fn() -> Result<LoanScorer<S, C>, ArtifactError> + Send + Sync>;

/// Load-once holder for the scorer shared by every request.
///
/// The first call to [`ScorerCache::get`] runs the loader; its outcome, success or failure, is
/// kept for the life of the process. A failed load is not retried.
pub struct ScorerCache<S, C> {
    cell: OnceLock<Result<Arc<LoanScorer<S, C>>, ArtifactError>>,
    loader: Option<Loader<S, C>>,
}

impl<S, C> ScorerCache<S, C>
where
    S: Scaler,
    C: Classifier,
{
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<LoanScorer<S, C>, ArtifactError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceLock::new(),
            loader: Some(Box::new(loader)),
        }
    }

    pub fn preloaded(scorer: LoanScorer<S, C>) -> Self {
        Self {
            cell: OnceLock::from(Ok(Arc::new(scorer))),
            loader: None,
        }
    }

    pub fn failed(error: ArtifactError) -> Self {
        Self {
            cell: OnceLock::from(Err(error)),
            loader: None,
        }
    }

    pub fn get(&self) -> Result<Arc<LoanScorer<S, C>>, &ArtifactError> {
        self.cell
            .get_or_init(|| {
                let loaded = match &self.loader {
                    Some(load) => load().map(Arc::new),
                    None => Err(ArtifactError::Unconfigured),
                };
                match &loaded {
                    Ok(scorer) => {
                        info!(width = scorer.feature_order().len(), "model artifacts loaded")
                    }
                    Err(err) => error!(error = %err, "model artifacts unavailable"),
                }
                loaded
            })
            .as_ref()
            .map(Arc::clone)
    }

    /// True once a load has been attempted and succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }
}

impl ScorerCache<StandardScaler, LogisticRegression> {
    pub fn from_paths(paths: ArtifactPaths) -> Self {
        Self::new(move || load_artifacts(&paths))
    }
}
