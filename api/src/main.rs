use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tweet_api::{AppState, app, config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tweet_api=info,tower_http=info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .context("failed to open database")?;

    let state = AppState {
        db: pool,
        jwt_secret: config.jwt_secret.clone(),
    };

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                - Health check");
    info!("  GET    /api/v1/tweets         - Public timeline (auth, paginated)");
    info!("  GET    /api/v1/tweets/my      - Caller's tweets (auth, paginated)");
    info!("  GET    /api/v1/tweets/:id     - Get specific tweet (auth)");
    info!("  POST   /api/v1/tweets         - Create tweet (auth)");
    info!("  PUT    /api/v1/tweets/:id     - Update tweet (auth, author only)");
    info!("  DELETE /api/v1/tweets/:id     - Delete tweet (auth, author only)");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
