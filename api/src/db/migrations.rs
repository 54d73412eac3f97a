use sqlx::SqlitePool;
use tracing::info;

pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          BLOB PRIMARY KEY,
            email       TEXT NOT NULL UNIQUE,
            full_name   TEXT,
            created_at  TEXT NOT NULL
        );

        -- author_id has no FK: a tweet may outlive its author
        CREATE TABLE IF NOT EXISTS tweets (
            id          BLOB PRIMARY KEY,
            content     TEXT NOT NULL,
            author_id   BLOB NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tweets_created
            ON tweets(created_at);

        CREATE INDEX IF NOT EXISTS idx_tweets_author
            ON tweets(author_id, created_at);
        ",
    )
    .execute(pool)
    .await?;

    info!("Database migrations complete");
    Ok(())
}
