use crate::cli::ArtifactArgs;
use loan_scoring::config::AppConfig;
use loan_scoring::error::AppError;
use loan_scoring::scoring::{ArtifactScorer, LogisticRegression, ScorerCache, StandardScaler};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedScorer = Arc<ScorerCache<StandardScaler, LogisticRegression>>;

/// Load the configuration and apply the command-line artifact directory, if any.
pub(crate) fn load_config(artifacts: &ArtifactArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(directory) = &artifacts.artifact_dir {
        config.artifacts.directory = directory.clone();
    }
    Ok(config)
}

pub(crate) fn scorer_cache(config: &AppConfig) -> SharedScorer {
    Arc::new(ScorerCache::from_paths(config.artifacts.paths()))
}

/// Load the artifacts for a one-shot command. Failure ends the command.
pub(crate) fn require_scorer(config: &AppConfig) -> Result<Arc<ArtifactScorer>, AppError> {
    let cache = scorer_cache(config);
    let scorer = cache.get().map_err(AppError::artifacts_unavailable)?;
    Ok(scorer)
}

/// Parse a snake_case choice such as `self_employed` into its form enum.
pub(crate) fn parse_choice<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let value = serde_json::Value::String(raw.trim().to_ascii_lowercase().replace('-', "_"));
    serde_json::from_value(value).map_err(|err| format!("unrecognised choice '{raw}' ({err})"))
}
