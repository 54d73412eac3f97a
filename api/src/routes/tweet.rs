use crate::{
    AppState,
    auth::CurrentUser,
    db,
    dto::{ListParams, Message, TweetCreate, TweetPublic, TweetUpdate, TweetsPublic, UserPublic},
    errors::ApiError,
    extract::{ValidatedJson, ValidatedQuery},
    models::{Tweet, User},
};
use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::SqliteConnection;
use tracing::info;
use uuid::Uuid;

const TWEET_NOT_FOUND: &str = "Tweet not found";

/// GET /tweets?skip=0&limit=100
/// Headers: Authorization: Bearer <token>
/// Public timeline, newest first, each tweet carrying its author.
pub async fn list_tweets(
    State(state): State<AppState>,
    _user: CurrentUser,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<TweetsPublic>, ApiError> {
    let mut tx = state.db.begin().await?;

    let count = db::tweets::count_all(&mut *tx).await?;
    let tweets = db::tweets::list_all(&mut *tx, params.skip, params.limit).await?;
    let data = with_authors(&mut *tx, tweets).await?;

    tx.commit().await?;

    Ok(Json(TweetsPublic { data, count }))
}

/// GET /tweets/my?skip=0&limit=100
/// Headers: Authorization: Bearer <token>
/// The caller's own tweets; `author` is left out since it is the caller.
pub async fn list_my_tweets(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<TweetsPublic>, ApiError> {
    let mut tx = state.db.begin().await?;

    let count = db::tweets::count_by_author(&mut *tx, user.id).await?;
    let tweets =
        db::tweets::list_by_author(&mut *tx, user.id, params.skip, params.limit).await?;

    tx.commit().await?;

    Ok(Json(TweetsPublic {
        data: tweets.into_iter().map(TweetPublic::from).collect(),
        count,
    }))
}

/// GET /tweets/:id
/// Headers: Authorization: Bearer <token>
pub async fn get_tweet(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TweetPublic>, ApiError> {
    let mut tx = state.db.begin().await?;

    let tweet = db::tweets::get(&mut *tx, id)
        .await?
        .ok_or(ApiError::NotFound(TWEET_NOT_FOUND))?;
    let author = db::users::get(&mut *tx, tweet.author_id).await?;

    tx.commit().await?;

    Ok(Json(
        TweetPublic::from(tweet).with_author(author.map(UserPublic::from)),
    ))
}

/// POST /tweets
/// Headers: Authorization: Bearer <token>
/// Body: { "content": "..." }
pub async fn create_tweet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(payload): ValidatedJson<TweetCreate>,
) -> Result<Json<TweetPublic>, ApiError> {
    let tweet = Tweet::new(user.id, payload.content);

    let mut tx = state.db.begin().await?;

    db::tweets::insert(&mut *tx, &tweet).await?;
    // Return what storage holds, not what we sent.
    let tweet = db::tweets::get(&mut *tx, tweet.id)
        .await?
        .ok_or_else(|| ApiError::InternalError(format!("Tweet {} vanished after insert", tweet.id)))?;

    tx.commit().await?;

    info!("Tweet created: {} by user {}", tweet.id, user.id);

    Ok(Json(tweet.into()))
}

/// PUT /tweets/:id
/// Headers: Authorization: Bearer <token>
/// Body: { "content": "..." } (every field optional)
pub async fn update_tweet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<TweetUpdate>,
) -> Result<Json<TweetPublic>, ApiError> {
    let mut tx = state.db.begin().await?;

    let mut tweet = db::tweets::get(&mut *tx, id)
        .await?
        .ok_or(ApiError::NotFound(TWEET_NOT_FOUND))?;
    ensure_author(&tweet, &user)?;

    apply_update(&mut tweet, payload);
    db::tweets::update(&mut *tx, &tweet).await?;
    let tweet = db::tweets::get(&mut *tx, id)
        .await?
        .ok_or(ApiError::NotFound(TWEET_NOT_FOUND))?;

    tx.commit().await?;

    info!("Tweet updated: {} by user {}", id, user.id);

    Ok(Json(tweet.into()))
}

/// DELETE /tweets/:id
/// Headers: Authorization: Bearer <token>
pub async fn delete_tweet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, ApiError> {
    let mut tx = state.db.begin().await?;

    let tweet = db::tweets::get(&mut *tx, id)
        .await?
        .ok_or(ApiError::NotFound(TWEET_NOT_FOUND))?;
    ensure_author(&tweet, &user)?;

    db::tweets::delete(&mut *tx, id).await?;

    tx.commit().await?;

    info!("Tweet deleted: {} by user {}", id, user.id);

    Ok(Json(Message::new("Tweet deleted successfully")))
}

fn ensure_author(tweet: &Tweet, user: &User) -> Result<(), ApiError> {
    if tweet.author_id != user.id {
        return Err(ApiError::PermissionDenied);
    }
    Ok(())
}

/// Merge-patch: only fields present in the payload are overwritten.
fn apply_update(tweet: &mut Tweet, update: TweetUpdate) {
    if let Some(content) = update.content {
        tweet.content = content;
    }
}

/// Attach each tweet's author with one batched lookup. Tweets whose author
/// no longer exists come back without one; order is preserved.
async fn with_authors(
    conn: &mut SqliteConnection,
    tweets: Vec<Tweet>,
) -> Result<Vec<TweetPublic>, sqlx::Error> {
    let mut author_ids: Vec<Uuid> = tweets.iter().map(|tweet| tweet.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors = db::users::get_many(conn, &author_ids).await?;

    Ok(tweets
        .into_iter()
        .map(|tweet| {
            let author = authors.get(&tweet.author_id).cloned().map(UserPublic::from);
            TweetPublic::from(tweet).with_author(author)
        })
        .collect())
}
