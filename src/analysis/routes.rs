//! HTTP route handlers for the analysis API.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use chrono::Utc;

use crate::dosing::compute_recommendations;
use crate::error::Result;
use crate::extract::Json;
use crate::AppState;

use super::models::{
    LocaleQuery, PlanRequest, PlanResponse, PromptResponse, RawResponseRequest, StripRequest,
    StripResponse, TreatmentPromptRequest, WaterQuality,
};
use super::parser::{self, AnalysisError};
use super::prompts;
use super::schedule::schedule_tasks;

/// Create the analysis router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/strip", post(strip))
        .route("/water", post(water))
        .route("/plan", post(plan))
        .route("/prompts/strip", get(strip_prompt))
        .route("/prompts/water", get(water_prompt))
        .route("/prompts/treatment-plan", post(treatment_plan_prompt))
}

/// Parse a test strip reading and compute recommendations from it.
async fn strip(
    State(state): State<AppState>,
    Json(request): Json<StripRequest>,
) -> Result<Json<StripResponse>> {
    let locale = state.config.locale_or_default(request.locale.as_deref());
    let analysis = parser::parse_strip_analysis(&request.response)?;
    let reading = analysis.to_reading(request.volume);

    let recommendations =
        compute_recommendations(&reading, locale).map_err(AnalysisError::InvalidReading)?;

    Ok(Json(StripResponse {
        hardness: analysis.hardness_or_default(),
        cya: analysis.cya_or_default(),
        analysis,
        reading,
        recommendations,
    }))
}

/// Parse a water clarity assessment.
async fn water(Json(request): Json<RawResponseRequest>) -> Result<Json<WaterQuality>> {
    Ok(Json(parser::parse_water_quality(&request.response)?))
}

/// Parse a treatment plan and lay its tasks out on the calendar.
async fn plan(Json(request): Json<PlanRequest>) -> Result<Json<PlanResponse>> {
    let plan = parser::parse_treatment_plan(&request.response)?;
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let tasks = schedule_tasks(&plan, request.pool_id, today)?;

    tracing::info!(pool_id = %request.pool_id, tasks = tasks.len(), "treatment plan scheduled");

    Ok(Json(PlanResponse { plan, tasks }))
}

async fn strip_prompt(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Json<PromptResponse> {
    let locale = state.config.locale_or_default(query.locale.as_deref());
    Json(PromptResponse {
        prompt: prompts::strip_analysis_prompt(locale),
    })
}

async fn water_prompt(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Json<PromptResponse> {
    let locale = state.config.locale_or_default(query.locale.as_deref());
    Json(PromptResponse {
        prompt: prompts::water_quality_prompt(locale),
    })
}

async fn treatment_plan_prompt(
    State(state): State<AppState>,
    Json(request): Json<TreatmentPromptRequest>,
) -> Json<PromptResponse> {
    let locale = state.config.locale_or_default(request.locale.as_deref());
    Json(PromptResponse {
        prompt: prompts::treatment_plan_prompt(&request.pool, &request.measurements, locale),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{decode, get_json, post_json};

    use super::*;

    #[tokio::test]
    async fn test_strip_to_recommendations() {
        let response = "```json\n{\"ph\": 7.0, \"free_chlorine\": 2.0, \"alkalinity\": 100, \"confidence\": 0.8}\n```";
        let (status, body) = post_json(
            "/api/analysis/strip",
            json!({"response": response, "volume": 50000, "locale": "es"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let strip: StripResponse = decode(body);
        assert_eq!(strip.hardness, 250.0);
        assert_eq!(strip.cya, 40.0);
        assert_eq!(strip.reading.pool_volume_liters, 50000.0);
        assert_eq!(strip.recommendations.len(), 1);
        assert_eq!(strip.recommendations[0].action, "Subir pH");
    }

    #[tokio::test]
    async fn test_strip_without_volume_is_rejected() {
        let response = r#"{"ph": 7.0, "free_chlorine": 2.0, "alkalinity": 100}"#;
        let (status, body) =
            post_json("/api/analysis/strip", json!({"response": response, "volume": 0})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_input");
        assert_eq!(body["field"], "volume");
    }

    #[tokio::test]
    async fn test_malformed_strip_is_unprocessable() {
        let (status, body) = post_json(
            "/api/analysis/strip",
            json!({"response": "I cannot read this strip", "volume": 1000}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "malformed_response");
    }

    #[tokio::test]
    async fn test_water_quality() {
        let (status, body) = post_json(
            "/api/analysis/water",
            json!({"response": r#"{"clarity": "algae", "diagnosis": "Green tint", "confidence": 0.6, "suggestion": "Shock and brush"}"#}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["clarity"], "algae");
    }

    #[tokio::test]
    async fn test_plan_scheduling() {
        let pool_id = uuid::Uuid::new_v4();
        let plan = r#"{"status_summary": "ok", "priority": "low",
            "maintenance_plan_daily": [{"day_index": 2, "tasks": [{"action": "Test pH", "note": "Morning"}]}]}"#;
        let (status, body) = post_json(
            "/api/analysis/plan",
            json!({"response": plan, "pool_id": pool_id, "today": "2025-03-30"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: PlanResponse = decode(body);
        assert_eq!(response.tasks.len(), 1);
        assert_eq!(response.tasks[0].scheduled_date.to_string(), "2025-04-01");
        assert_eq!(response.tasks[0].pool_id, pool_id);
    }

    #[tokio::test]
    async fn test_plan_bad_day_index() {
        let plan = r#"{"maintenance_plan_daily": [{"day_index": 45, "tasks": []}]}"#;
        let (status, body) = post_json(
            "/api/analysis/plan",
            json!({"response": plan, "pool_id": uuid::Uuid::new_v4()}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_plan");
        assert_eq!(body["field"], "day_index");
    }

    #[tokio::test]
    async fn test_prompt_endpoints() {
        let (status, body) = get_json("/api/analysis/prompts/strip?locale=es").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["prompt"].as_str().unwrap().ends_with("Spanish."));

        let (status, body) = get_json("/api/analysis/prompts/water").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["prompt"].as_str().unwrap().starts_with("Analyze this pool image"));

        let (status, body) = post_json(
            "/api/analysis/prompts/treatment-plan",
            json!({
                "pool": {"name": "Casa", "volume": 30000, "material": "tile", "shape": "round"},
                "measurements": {"ph": 7.4, "free_chlorine": 2, "alkalinity": 100},
                "locale": "es"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("Pool Info: Casa, 30000L, material tile, shape round."));
        assert!(prompt.contains("Clarity: Unknown."));
    }
}
