//! Error types for the renderer and the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rejection of a decoded itinerary at the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

/// Failure to turn a layout into PDF bytes. Never retried.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Encoding(String),

    #[error("render task failed: {0}")]
    Worker(String),
}

/// Request-level error, mapped onto a JSON response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid itinerary: {0}")]
    InvalidData(#[from] ValidationError),

    #[error("PDF generation failed: {0}")]
    Render(#[from] RenderError),

    #[error("no route for {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiError::InvalidJson(e) => {
                log::warn!("Rejected request body: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON",
                    "Failed to parse request body".to_string(),
                )
            }
            ApiError::InvalidData(e) => {
                log::warn!("Rejected itinerary: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid data",
                    format!("Trip details are required: {}", e),
                )
            }
            ApiError::Render(e) => {
                log::error!("PDF generation error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF generation failed",
                    "The itinerary could not be rendered".to_string(),
                )
            }
            ApiError::NotFound(path) => {
                log::debug!("No route for {}", path);
                (
                    StatusCode::NOT_FOUND,
                    "Not Found",
                    "API endpoint not found".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ApiError::from(bad_json).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ValidationError::MissingField("destination"))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RenderError::Encoding("boom".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::NotFound("/nope".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    async fn body_of(error: ApiError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn render_failures_are_redacted() {
        let errors = [
            RenderError::Encoding("secret detail".into()),
            RenderError::Worker("secret detail".into()),
        ];
        for error in errors {
            let (status, body) = body_of(ApiError::Render(error)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!body.contains("secret detail"), "leaked: {body}");

            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["error"], "PDF generation failed");
            assert_eq!(json["message"], "The itinerary could not be rendered");
        }
    }

    #[tokio::test]
    async fn validation_message_names_the_field() {
        let error = ApiError::from(ValidationError::MissingField("customerName"));
        let (_, body) = body_of(error).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Invalid data");
        assert_eq!(
            json["message"],
            "Trip details are required: customerName must not be empty"
        );
    }
}
