use crate::cli::ServeArgs;
use crate::infra::{load_config, scorer_cache, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_scoring::error::AppError;
use loan_scoring::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = load_config(&args.artifacts)?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let cache = scorer_cache(&config);
    let artifacts_loaded = cache.get().is_ok();
    if !artifacts_loaded {
        error!(
            directory = %config.artifacts.directory.display(),
            "serving without model artifacts; scoring endpoints will answer 503"
        );
    }

    let app = with_service_routes(cache)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(artifacts_loaded, Ordering::Release);

    info!(?config.environment, %addr, artifacts_loaded, "loan simulator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
