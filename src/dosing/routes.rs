//! HTTP route handlers for the dosing API.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use chrono::Utc;

use crate::error::Result;
use crate::extract::Json;
use crate::AppState;

use super::engine::compute_recommendations;
use super::history::{self, MeasurementRecord};
use super::models::{MeasurementRequest, RecommendRequest, RecommendResponse};

/// Create the dosing router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/recommendations", post(recommendations))
        .route("/measurement", post(measurement))
}

/// Health check for the dosing engine.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "dosing-engine",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Compute dosing recommendations for a reading.
async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>> {
    let locale = state.config.locale_or_default(request.locale.as_deref());
    let reading = request.reading;

    let recommendations = compute_recommendations(&reading, locale)?;

    Ok(Json(RecommendResponse {
        locale,
        in_range: reading.is_balanced(),
        recommendations,
        input_hash: history::reading_hash(&reading),
    }))
}

/// Compute recommendations and return the history record for the caller to store.
async fn measurement(
    State(state): State<AppState>,
    Json(request): Json<MeasurementRequest>,
) -> Result<Json<MeasurementRecord>> {
    let locale = state.config.locale_or_default(request.locale.as_deref());
    let recommendations = compute_recommendations(&request.reading, locale)?;

    let record = history::build_record(request.pool_id, &request.reading, recommendations, Utc::now());
    tracing::info!(pool_id = %record.pool_id, count = record.recommendation_json.len(), "measurement record built");

    Ok(Json(record))
}
