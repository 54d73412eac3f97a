pub mod health;
pub mod tweet;
