use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::table_names::LIKE_TABLE_NAME;
use crate::middleware::utils::db_utils::ViewFieldSelector;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserTweetView {
    pub id: Thing,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub owner_username: Option<String>,
    pub like_count: i64,
    #[serde(default)]
    pub liked_by: Vec<Thing>,
}

impl ViewFieldSelector for UserTweetView {
    fn get_select_query_fields() -> String {
        format!(
            "id, \
            content, \
            created_at, \
            created_by.username AS owner_username, \
            count(<-{LIKE_TABLE_NAME}) AS like_count, \
            <-{LIKE_TABLE_NAME}.in AS liked_by"
        )
    }
}
