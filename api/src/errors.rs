use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(&'static str),
    /// Caller is not the author of the tweet being changed.
    #[error("Not enough permissions")]
    PermissionDenied,
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// Storage and internal failures are logged here and masked as a plain 500,
/// so driver messages never reach the client.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            // 400 rather than 403 is what existing clients expect
            ApiError::PermissionDenied => (
                StatusCode::BAD_REQUEST,
                "Not enough permissions".to_string(),
            ),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
