use crate::models::User;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor};
use std::collections::HashMap;
use uuid::Uuid;

pub async fn get<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, email, full_name, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Batch-fetch users for a set of ids. Unknown ids are simply missing from
/// the returned map.
pub async fn get_many(
    conn: &mut SqliteConnection,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, User>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut query =
        QueryBuilder::<Sqlite>::new("SELECT id, email, full_name, created_at FROM users WHERE id IN (");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let users: Vec<User> = query.build_query_as().fetch_all(&mut *conn).await?;

    Ok(users.into_iter().map(|user| (user.id, user)).collect())
}

/// Users are provisioned by the identity service; this is its write path
/// into the shared table.
pub async fn insert<'e>(executor: impl SqliteExecutor<'e>, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (id, email, full_name, created_at) VALUES (?, ?, ?, ?)")
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(user.created_at)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
