use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::app::services::ServiceError;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Validation(msg) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            ServiceError::NotFound => {
                json_error(StatusCode::NOT_FOUND, "not_found", self.to_string())
            }
            // Display is the generic context only; the store detail was logged.
            ServiceError::Store { .. } => json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                self.to_string(),
            ),
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
