use serde::Deserialize;
use validator::Validate;

pub const MAX_CONTENT_LEN: u64 = 280;
pub const MAX_LIMIT: i64 = 1000;

/// Body of `POST /tweets`. The author always comes from the caller's token;
/// any author field a client sends is dropped here.
#[derive(Debug, Validate, Deserialize)]
pub struct TweetCreate {
    #[validate(length(min = 1, max = MAX_CONTENT_LEN, message = "Content must be 1-280 characters"))]
    pub content: String,
}

/// Body of `PUT /tweets/{id}`. Only fields that are present get written.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct TweetUpdate {
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_CONTENT_LEN, message = "Content must be 1-280 characters"))]
    pub content: Option<String>,
}

/// Pagination query parameters
#[derive(Debug, Validate, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_skip")]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, max = MAX_LIMIT, message = "limit must be between 0 and 1000"))]
    pub limit: i64,
}

fn default_skip() -> i64 {
    0
}
fn default_limit() -> i64 {
    100
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: default_skip(),
            limit: default_limit(),
        }
    }
}
