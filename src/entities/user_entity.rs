use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::USER_TABLE_NAME;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};

/// Narrow user record consumed read-only by view joins. Registration and
/// authentication live outside this service.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocalUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

pub struct LocalUserDbService<'a> {
    pub db: &'a Db,
    pub ctx: &'a Ctx,
}

pub const TABLE_NAME: &str = USER_TABLE_NAME;

impl<'a> LocalUserDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS username ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE INDEX IF NOT EXISTS username_idx ON TABLE {TABLE_NAME} COLUMNS username UNIQUE;
    DEFINE FIELD IF NOT EXISTS email ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS full_name ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check().expect("should mutate local user");

        Ok(())
    }

    pub async fn create(&self, create_user: CreateUser) -> CtxResult<LocalUser> {
        let user: Option<LocalUser> = self
            .db
            .create(TABLE_NAME)
            .content(create_user)
            .await
            .map_err(CtxError::from(self.ctx))?;
        user.ok_or_else(|| {
            self.ctx.to_ctx_error(AppError::Generic {
                description: "user create returned no record".to_string(),
            })
        })
    }
}
