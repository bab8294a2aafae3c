use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::table_names::LIKE_TABLE_NAME;
use crate::middleware::utils::db_utils::ViewFieldSelector;
use crate::models::view::user::UserView;

/// Pipeline row over the like table: the reaction joined with its published
/// video, the video's total like count and the owner projection. Collapses
/// happen in the select fields; nesting into the response shape happens in
/// `LikedVideoView::from`.
#[derive(Debug, Deserialize)]
pub struct LikedVideoRow {
    pub id: Thing,
    pub created_at: DateTime<Utc>,
    pub video: VideoPreview,
    pub like_count: i64,
    pub video_owner: Option<UserView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoPreview {
    pub id: Thing,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: f64,
    pub created_at: DateTime<Utc>,
    pub views: i64,
}

impl ViewFieldSelector for LikedVideoRow {
    fn get_select_query_fields() -> String {
        format!(
            "id, \
            created_at, \
            out.{{id, video_file, thumbnail, title, description, duration, created_at, views}} AS video, \
            count(out<-{LIKE_TABLE_NAME}) AS like_count, \
            out.owner.{{id, username, email, full_name}} AS video_owner"
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikedVideoView {
    pub id: Thing,
    pub created_at: DateTime<Utc>,
    pub video: LikedVideoItem,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikedVideoItem {
    pub id: Thing,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: f64,
    pub created_at: DateTime<Utc>,
    pub views: i64,
    pub like_count: i64,
    pub video_owner: Option<UserView>,
}

impl From<LikedVideoRow> for LikedVideoView {
    fn from(row: LikedVideoRow) -> Self {
        LikedVideoView {
            id: row.id,
            created_at: row.created_at,
            video: LikedVideoItem {
                id: row.video.id,
                video_file: row.video.video_file,
                thumbnail: row.video.thumbnail,
                title: row.video.title,
                description: row.video.description,
                duration: row.video.duration,
                created_at: row.video.created_at,
                views: row.video.views,
                like_count: row.like_count,
                video_owner: row.video_owner,
            },
        }
    }
}
