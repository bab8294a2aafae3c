use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use surrealdb::sql::Thing;

use crate::database::table_names::{COMMENT_TABLE_NAME, TWEET_TABLE_NAME, VIDEO_TABLE_NAME};

/// Tagged reaction target. One reaction points at exactly one kind of record;
/// the uniqueness index covers `(in, kind, out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReactionTargetKind {
    Video,
    Comment,
    Tweet,
}

impl ReactionTargetKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            ReactionTargetKind::Video => VIDEO_TABLE_NAME,
            ReactionTargetKind::Comment => COMMENT_TABLE_NAME,
            ReactionTargetKind::Tweet => TWEET_TABLE_NAME,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    #[serde(rename = "in")]
    pub liked_by: Thing,
    #[serde(rename = "out")]
    pub target: Thing,
    pub kind: ReactionTargetKind,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}
