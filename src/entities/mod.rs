pub mod comment_entity;
pub mod reaction_entity;
pub mod tweet_entity;
pub mod user_entity;
pub mod video_entity;
