pub mod likes;
pub mod tweets;
