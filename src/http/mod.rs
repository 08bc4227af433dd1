//! HTTP surface for the decision engine: probes, metrics, and the decision endpoints.

mod routes;

pub use routes::{
    BatchDecisionRequest, BatchDecisionResponse, DecideRequest, DecideResponse, RankRequest,
    RankResponse,
};

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::EngineConfig;
use crate::decision::DecisionEngine;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub engine: DecisionEngine,
    pub limits: EngineConfig,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle, limits: EngineConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            engine: DecisionEngine::new(),
            limits,
        }
    }
}

/// Router builder exposing probes and decision endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::healthcheck))
        .route("/ready", get(routes::readiness_endpoint))
        .route("/metrics", get(routes::metrics_endpoint))
        .route("/api/v1/decisions", post(routes::decide_endpoint))
        .route("/api/v1/decisions/batch", post(routes::batch_endpoint))
        .route("/api/v1/decisions/rank", post(routes::rank_endpoint))
        .with_state(state)
}
