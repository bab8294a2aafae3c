pub mod liked_video;
pub mod user;
pub mod user_tweet;
