use sqlx::SqlitePool;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// `SqlitePool` is already reference counted, so cloning the state per
/// request is cheap. Each handler checks a connection out of the pool for the
/// duration of its transaction and returns it on drop.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
}
