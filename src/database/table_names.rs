pub const LIKE_TABLE_NAME: &str = "like";
pub const USER_TABLE_NAME: &str = "user";
pub const VIDEO_TABLE_NAME: &str = "video";
pub const COMMENT_TABLE_NAME: &str = "comment";
pub const TWEET_TABLE_NAME: &str = "tweet";
