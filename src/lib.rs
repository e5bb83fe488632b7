//! PoolCare - Rust/Axum dosing service
//!
//! Water-chemistry dosing recommendations and the deterministic helpers
//! around the app's vision analysis, served as JSON endpoints.
//! The app shell keeps auth, storage and the AI calls themselves.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod analysis;
pub mod config;
pub mod dosing;
pub mod error;
pub mod extract;
pub mod pool;

use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the full router with middleware.
pub fn app(state: AppState) -> Router {
    let cors_allow_any = state.config.cors_allow_any;

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/dosing", dosing::router())
        .nest("/api/pools", pool::router())
        .nest("/api/analysis", analysis::router())
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "poolcare-web",
        "version": env!("CARGO_PKG_VERSION"),
        "default_locale": state.config.default_locale,
    }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::{app, config::Config, AppState};

    pub async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app(AppState::new(Config::default()))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(request).await
    }

    pub async fn post_raw(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(request).await
    }

    pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(request).await
    }

    pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }
}
