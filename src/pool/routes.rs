//! HTTP route handlers for pool setup helpers.

use axum::{routing::post, Router};

use crate::error::Result;
use crate::extract::Json;
use crate::AppState;

use super::models::{VolumeRequest, VolumeResponse};
use super::volume::estimate_volume_liters;

pub fn router() -> Router<AppState> {
    Router::new().route("/volume", post(volume))
}

/// Estimate pool volume from its dimensions
async fn volume(Json(request): Json<VolumeRequest>) -> Result<Json<VolumeResponse>> {
    let volume_liters = estimate_volume_liters(
        request.shape,
        request.length.meters(),
        request.width.meters(),
        request.depth.meters(),
    )?;

    Ok(Json(VolumeResponse {
        shape: request.shape,
        volume_liters,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::post_json;

    #[tokio::test]
    async fn test_volume_from_form_text() {
        let (status, body) = post_json(
            "/api/pools/volume",
            json!({"shape": "rectangular", "length": "10", "width": "5,5", "depth": 1.2}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shape"], "rectangular");
        assert_eq!(body["volume_liters"], 66000);
    }

    #[tokio::test]
    async fn test_blank_dimension_rejected() {
        let (status, body) = post_json(
            "/api/pools/volume",
            json!({"shape": "kidney", "length": "", "width": 4, "depth": 1.5}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_dimension");
        assert_eq!(body["field"], "length");
    }

    #[tokio::test]
    async fn test_wrong_dimension_type_names_field() {
        let (status, body) = post_json(
            "/api/pools/volume",
            json!({"shape": "oval", "length": true, "width": 4, "depth": 1.5}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_input");
        assert_eq!(body["field"], "length");
    }
}
