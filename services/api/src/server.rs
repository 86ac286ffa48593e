use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_scheme_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scheme_finder::config::AppConfig;
use scheme_finder::error::AppError;
use scheme_finder::matching::MatchEngine;
use scheme_finder::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let engine = Arc::new(MatchEngine::default());

    let app = with_scheme_routes(catalog.clone(), engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, schemes = catalog.len(), "scheme finder ready");

    axum::serve(listener, app).await?;
    Ok(())
}
