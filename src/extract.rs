//! JSON extractor whose rejections render as `AppError`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Drop-in for `axum::Json`: same body handling, but a body that does not
/// deserialize comes back as a 400 `invalid_input` naming the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Split a body rejection into the offending field path and the message.
///
/// Data errors read `<path>: <serde message>`; errors at the document root
/// carry no path.
pub(crate) fn split_rejection(rejection: &JsonRejection) -> (Option<String>, String) {
    let text = rejection.body_text();
    let detail = match rejection {
        JsonRejection::JsonDataError(_) => text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text.as_str()),
        _ => return (None, text),
    };
    match detail.split_once(": ") {
        Some((path, message)) if !path.is_empty() && !path.contains(char::is_whitespace) => {
            (Some(path.to_string()), message.to_string())
        }
        _ => (None, detail.to_string()),
    }
}
