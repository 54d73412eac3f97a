mod requests;
mod responses;

pub use requests::{ListParams, MAX_CONTENT_LEN, MAX_LIMIT, TweetCreate, TweetUpdate};
pub use responses::{Message, PaginatedResponse, TweetPublic, TweetsPublic, UserPublic};
