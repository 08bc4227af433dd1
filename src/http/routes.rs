use std::collections::BTreeMap;
use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::AppState;
use crate::decision::{
    Decision, ListingId, ListingSnapshot, RankedListing, SubscoreBreakdown, ViewerContext,
};
use crate::error::{AppError, InputError};
use crate::telemetry::report_violations;

#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub listing: ListingSnapshot,
    #[serde(default)]
    pub context: Option<ViewerContext>,
}

#[derive(Debug, Serialize)]
pub struct DecideResponse {
    pub listing_id: ListingId,
    pub decision: Decision,
    pub subscores: SubscoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct BatchDecisionRequest {
    pub listings: Vec<ListingSnapshot>,
    #[serde(default)]
    pub context: Option<ViewerContext>,
}

#[derive(Debug, Serialize)]
pub struct BatchDecisionResponse {
    pub decisions: BTreeMap<ListingId, Decision>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub listings: Vec<ListingSnapshot>,
    #[serde(default)]
    pub context: Option<ViewerContext>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<RankedListing>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn decide_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<DecideRequest>,
) -> Json<DecideResponse> {
    let DecideRequest { listing, context } = payload;
    let context = context.unwrap_or_default();

    let evaluation = state.engine.evaluate(&listing, &context);
    report_violations(&listing.id, &evaluation.violations);
    debug!(
        listing_id = %listing.id,
        score = evaluation.decision.match_score(),
        verdict = evaluation.decision.verdict().label(),
        "listing evaluated"
    );

    Json(DecideResponse {
        listing_id: listing.id,
        decision: evaluation.decision,
        subscores: evaluation.subscores,
    })
}

pub(crate) async fn batch_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<BatchDecisionRequest>,
) -> Result<Json<BatchDecisionResponse>, AppError> {
    let BatchDecisionRequest { listings, context } = payload;
    ensure_within_limit(&state, listings.len())?;

    let context = context.unwrap_or_default();

    let decisions: BTreeMap<ListingId, Decision> = state
        .engine
        .evaluate_all(&listings, &context)
        .into_iter()
        .map(|(listing_id, evaluation)| {
            report_violations(&listing_id, &evaluation.violations);
            (listing_id, evaluation.decision)
        })
        .collect();
    debug!(count = decisions.len(), "batch evaluated");

    Ok(Json(BatchDecisionResponse { decisions }))
}

pub(crate) async fn rank_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let RankRequest {
        listings,
        context,
        limit,
    } = payload;
    ensure_within_limit(&state, listings.len())?;

    let mut ranked = state
        .engine
        .rank_with_decisions(listings, context.as_ref());
    for entry in &ranked {
        report_violations(&entry.listing.id, &entry.violations);
    }
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    debug!(count = ranked.len(), "listings ranked");

    Ok(Json(RankResponse { ranked }))
}

fn ensure_within_limit(state: &AppState, actual: usize) -> Result<(), AppError> {
    let limit = state.limits.max_batch_size;
    if actual > limit {
        return Err(InputError::BatchTooLarge { limit, actual }.into());
    }
    Ok(())
}
