use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::http::{router, AppState};
use crate::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
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
    let state = AppState::new(prometheus_handle, config.engine);
    let readiness_flag = state.readiness.clone();

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_batch_size = config.engine.max_batch_size,
        "listing decision service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
