use crate::models::{Tweet, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TweetPublic {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserPublic>,
}

impl TweetPublic {
    pub fn with_author(mut self, author: Option<UserPublic>) -> Self {
        self.author = author;
        self
    }
}

impl From<Tweet> for TweetPublic {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id,
            content: tweet.content,
            author_id: tweet.author_id,
            created_at: tweet.created_at,
            author: None,
        }
    }
}

/// Paginated response wrapper
///
/// `count` is the number of matching rows, not the length of `data`.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub count: i64,
}

pub type TweetsPublic = PaginatedResponse<TweetPublic>;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
