//! Application error type and its HTTP rendering.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::dosing::DosingError;
use crate::extract::split_rejection;
use crate::pool::VolumeError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Dosing(#[from] DosingError),
    #[error(transparent)]
    Volume(#[from] VolumeError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// Request body missing, not JSON, or the wrong shape
    #[error("{message}")]
    Body {
        field: Option<String>,
        message: String,
        unsupported_media_type: bool,
    },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let (field, message) = split_rejection(&rejection);
        AppError::Body {
            field,
            message,
            unsupported_media_type: matches!(rejection, JsonRejection::MissingJsonContentType(_)),
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Stable machine-readable error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Dosing(_) => "invalid_input",
            AppError::Volume(_) => "invalid_dimension",
            AppError::Analysis(e) => e.error_type(),
            AppError::Body {
                unsupported_media_type: true,
                ..
            } => "unsupported_media_type",
            AppError::Body { .. } => "invalid_input",
        }
    }

    /// Offending field, when the error is about one. Body errors report the
    /// dotted path, e.g. `reading.ph`.
    pub fn field(&self) -> Option<String> {
        match self {
            AppError::Dosing(e) => Some(e.field().to_string()),
            AppError::Volume(e) => Some(e.field().to_string()),
            AppError::Analysis(e) => e.field().map(str::to_string),
            AppError::Body { field, .. } => field.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Analysis(AnalysisError::EmptyResponse | AnalysisError::Malformed(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Body {
                unsupported_media_type: true,
                ..
            } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error_type = self.error_type(), "request rejected: {}", self);
        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
            field: self.field(),
        };
        (self.status(), Json(body)).into_response()
    }
}
