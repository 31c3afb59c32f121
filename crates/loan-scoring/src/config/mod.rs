use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::scoring::ArtifactPaths;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub artifacts: ArtifactConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let directory = env::var("APP_ARTIFACT_DIR").unwrap_or_else(|_| "artifacts".to_string());
        if directory.trim().is_empty() {
            return Err(ConfigError::EmptyArtifactDir);
        }
        let artifacts = ArtifactConfig {
            directory: PathBuf::from(directory),
            model_path: env::var("APP_MODEL_PATH").ok().map(PathBuf::from),
            scaler_path: env::var("APP_SCALER_PATH").ok().map(PathBuf::from),
            features_path: env::var("APP_FEATURES_PATH").ok().map(PathBuf::from),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            artifacts,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the exported model, scaler and feature-order files.
///
/// Explicit paths win over the files expected inside `directory`.
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub directory: PathBuf,
    pub model_path: Option<PathBuf>,
    pub scaler_path: Option<PathBuf>,
    pub features_path: Option<PathBuf>,
}

impl ArtifactConfig {
    pub const MODEL_FILE: &'static str = "model.json";
    pub const SCALER_FILE: &'static str = "scaler.json";
    pub const FEATURES_FILE: &'static str = "features.json";

    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            model_path: None,
            scaler_path: None,
            features_path: None,
        }
    }

    pub fn paths(&self) -> ArtifactPaths {
        let resolve = |explicit: &Option<PathBuf>, file: &str| {
            explicit
                .clone()
                .unwrap_or_else(|| self.directory.join(file))
        };

        ArtifactPaths {
            model: resolve(&self.model_path, Self::MODEL_FILE),
            scaler: resolve(&self.scaler_path, Self::SCALER_FILE),
            features: resolve(&self.features_path, Self::FEATURES_FILE),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyArtifactDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptyArtifactDir => write!(f, "APP_ARTIFACT_DIR must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::EmptyArtifactDir => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
