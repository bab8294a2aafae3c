use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::{USER_TABLE_NAME, VIDEO_TABLE_NAME};
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};

/// Upload handling and publishing workflows are owned elsewhere; this service
/// carries the projection the like views join against.
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub owner: Thing,
    pub title: String,
    pub description: Option<String>,
    pub video_file: String,
    pub thumbnail: String,
    pub duration: f64,
    #[serde(default)]
    pub views: i64,
    pub is_published: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateVideo {
    pub owner: Thing,
    pub title: String,
    pub description: Option<String>,
    pub video_file: String,
    pub thumbnail: String,
    pub duration: f64,
    pub is_published: bool,
}

pub struct VideoDbService<'a> {
    pub db: &'a Db,
    pub ctx: &'a Ctx,
}

pub const TABLE_NAME: &str = VIDEO_TABLE_NAME;

impl<'a> VideoDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS owner ON TABLE {TABLE_NAME} TYPE record<{USER_TABLE_NAME}>;
    DEFINE INDEX IF NOT EXISTS owner_idx ON TABLE {TABLE_NAME} COLUMNS owner;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS description ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS video_file ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS thumbnail ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS duration ON TABLE {TABLE_NAME} TYPE float DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS views ON TABLE {TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS is_published ON TABLE {TABLE_NAME} TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check().expect("should mutate video");

        Ok(())
    }

    pub async fn create(&self, create_video: CreateVideo) -> CtxResult<Video> {
        let video: Option<Video> = self
            .db
            .create(TABLE_NAME)
            .content(create_video)
            .await
            .map_err(CtxError::from(self.ctx))?;
        video.ok_or_else(|| {
            self.ctx.to_ctx_error(AppError::Generic {
                description: "video create returned no record".to_string(),
            })
        })
    }
}
