use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("AI API request failed: {0}")]
    AiRequest(#[from] reqwest::Error),

    #[error("AI API returned an error: {status}: {body}")]
    AiApi { status: u16, body: String },

    #[error("AI API returned an unusable response: {0}")]
    AiResponse(String),

    #[error("Unsupported image format")]
    UnsupportedImage,

    #[error("Image too large")]
    ImageTooLarge,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Not found")]
    NotFound,

    #[error("Persistence is not configured")]
    PersistenceDisabled,
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// Internal details (database errors, upstream API bodies) are logged
/// but never echoed back to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::AiRequest(ref e) => {
                tracing::error!("AI API request failed: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Recipe service is unavailable - please try again",
                )
            }
            AppError::AiApi { status, ref body } => {
                tracing::error!("AI API error response (status {}): {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    "Recipe service is unavailable - please try again",
                )
            }
            AppError::AiResponse(ref msg) => {
                tracing::error!("Unusable AI API response: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Recipe service is unavailable - please try again",
                )
            }
            AppError::UnsupportedImage => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                crate::constants::ERR_UNSUPPORTED_IMAGE,
            ),
            AppError::ImageTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Image size exceeds maximum allowed",
            ),
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Multipart(ref e) => {
                // An upload that blows the body limit before the image
                // cap is still an oversize image, not a malformed one
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "Image size exceeds maximum allowed",
                    )
                } else {
                    tracing::warn!("Malformed multipart request: {:?}", e);
                    (StatusCode::BAD_REQUEST, "Malformed upload")
                }
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::PersistenceDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Persistence is not configured - set DATABASE_URL to enable it",
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
