use crate::models::Tweet;
use sqlx::SqliteConnection;
use uuid::Uuid;

pub async fn count_all(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
        .fetch_one(&mut *conn)
        .await
}

pub async fn count_by_author(
    conn: &mut SqliteConnection,
    author_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tweets WHERE author_id = ?")
        .bind(author_id)
        .fetch_one(&mut *conn)
        .await
}

/// Newest first.
pub async fn list_all(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<Tweet>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, content, author_id, created_at FROM tweets
         ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await
}

/// Newest first.
pub async fn list_by_author(
    conn: &mut SqliteConnection,
    author_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Tweet>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, content, author_id, created_at FROM tweets
         WHERE author_id = ?
         ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(author_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await
}

pub async fn get(conn: &mut SqliteConnection, id: Uuid) -> Result<Option<Tweet>, sqlx::Error> {
    sqlx::query_as("SELECT id, content, author_id, created_at FROM tweets WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn insert(conn: &mut SqliteConnection, tweet: &Tweet) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO tweets (id, content, author_id, created_at) VALUES (?, ?, ?, ?)")
        .bind(tweet.id)
        .bind(&tweet.content)
        .bind(tweet.author_id)
        .bind(tweet.created_at)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Writes the client-updatable columns. `id`, `author_id` and `created_at`
/// are never touched.
pub async fn update(conn: &mut SqliteConnection, tweet: &Tweet) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE tweets SET content = ? WHERE id = ?")
        .bind(&tweet.content)
        .bind(tweet.id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn delete(conn: &mut SqliteConnection, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tweets WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
