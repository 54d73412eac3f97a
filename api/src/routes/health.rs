use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use tracing::warn;

/// GET /health
/// Response: 200 OK with JSON, 503 when the database is unreachable
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db).await {
        warn!("Health check failed: {}", e);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "unhealthy" })),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
          "status": "healthy",
          "timestamp": Utc::now().timestamp()
        })),
    )
}
