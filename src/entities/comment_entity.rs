use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::{COMMENT_TABLE_NAME, USER_TABLE_NAME, VIDEO_TABLE_NAME};
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub video: Thing,
    pub created_by: Thing,
    pub content: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateComment {
    pub video: Thing,
    pub created_by: Thing,
    pub content: String,
}

pub struct CommentDbService<'a> {
    pub db: &'a Db,
    pub ctx: &'a Ctx,
}

pub const TABLE_NAME: &str = COMMENT_TABLE_NAME;

impl<'a> CommentDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS video ON TABLE {TABLE_NAME} TYPE record<{VIDEO_TABLE_NAME}>;
    DEFINE INDEX IF NOT EXISTS video_idx ON TABLE {TABLE_NAME} COLUMNS video;
    DEFINE FIELD IF NOT EXISTS created_by ON TABLE {TABLE_NAME} TYPE record<{USER_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check().expect("should mutate comment");

        Ok(())
    }

    pub async fn create(&self, create_comment: CreateComment) -> CtxResult<Comment> {
        let comment: Option<Comment> = self
            .db
            .create(TABLE_NAME)
            .content(create_comment)
            .await
            .map_err(CtxError::from(self.ctx))?;
        comment.ok_or_else(|| {
            self.ctx.to_ctx_error(AppError::Generic {
                description: "comment create returned no record".to_string(),
            })
        })
    }
}
