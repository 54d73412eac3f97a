mod tweet;
mod user;

pub use tweet::Tweet;
pub use user::User;
