use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;
use tweet_api::{AppState, app, auth::create_token, db, models::{Tweet, User}};
use uuid::Uuid;

pub const SECRET: &str = "integration-secret";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::migrations::run(&pool).await.unwrap();

        let router = app(AppState {
            db: pool.clone(),
            jwt_secret: SECRET.to_string(),
        });

        Self { router, pool }
    }

    /// Provision a user the way the identity service would and return a
    /// bearer token for it.
    pub async fn user(&self, email: &str, full_name: &str) -> (User, String) {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: Some(full_name.to_string()),
            created_at: Utc::now(),
        };
        db::users::insert(&self.pool, &user).await.unwrap();

        let token = create_token(&user.id, &user.email, SECRET).unwrap();
        (user, token)
    }

    /// Insert a tweet directly with a fixed timestamp.
    pub async fn seed_tweet(&self, author: &User, content: &str, created_at: DateTime<Utc>) -> Tweet {
        let tweet = Tweet {
            id: Uuid::new_v4(),
            content: content.to_string(),
            author_id: author.id,
            created_at,
        };
        let mut conn = self.pool.acquire().await.unwrap();
        db::tweets::insert(&mut *conn, &tweet).await.unwrap();
        tweet
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }
}

pub fn tweet_uri(id: impl std::fmt::Display) -> String {
    format!("/api/v1/tweets/{}", id)
}
