// ============================================================================
// TWEET SERVICE - CRUD over short text posts owned by authenticated users
// ============================================================================

// - Public timeline and per-user listings with skip/limit pagination
// - Create, fetch, update (merge-patch) and delete by id
// - Only a tweet's author may change or delete it
// - JWT bearer authentication against a shared users table
// - SQLite storage, one transaction per request

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod states;

pub use states::AppState;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the router with every route, the shared state and middleware.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/v1/tweets",
            get(routes::tweet::list_tweets).post(routes::tweet::create_tweet),
        )
        .route("/api/v1/tweets/my", get(routes::tweet::list_my_tweets))
        .route(
            "/api/v1/tweets/{id}",
            get(routes::tweet::get_tweet)
                .put(routes::tweet::update_tweet)
                .delete(routes::tweet::delete_tweet),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
