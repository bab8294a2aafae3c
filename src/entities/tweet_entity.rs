use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::{TWEET_TABLE_NAME, USER_TABLE_NAME};
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};
use crate::middleware::utils::db_utils::{
    get_entity_list_view, record_exists, with_not_found_err, IdentIdName, Pagination, QryOrder,
};
use crate::middleware::utils::string_utils::get_thing_of;
use crate::models::view::user_tweet::UserTweetView;

#[derive(Debug, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub created_by: Thing,
    pub content: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct CreateTweet {
    created_by: Thing,
    content: String,
}

pub struct TweetDbService<'a> {
    pub db: &'a Db,
    pub ctx: &'a Ctx,
}

pub const TABLE_NAME: &str = TWEET_TABLE_NAME;

impl<'a> TweetDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS created_by ON TABLE {TABLE_NAME} TYPE record<{USER_TABLE_NAME}>;
    DEFINE INDEX IF NOT EXISTS created_by_idx ON TABLE {TABLE_NAME} COLUMNS created_by;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE FIELD IF NOT EXISTS updated_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check().expect("should mutate tweet");

        Ok(())
    }

    pub async fn create(&self, created_by: Thing, content: &str) -> CtxResult<Tweet> {
        if content.trim().is_empty() {
            return Err(self.ctx.to_ctx_error(AppError::Validation {
                description: "content required".to_string(),
            }));
        }
        let tweet: Option<Tweet> = self
            .db
            .create(TABLE_NAME)
            .content(CreateTweet {
                created_by,
                content: content.to_string(),
            })
            .await
            .map_err(CtxError::from(self.ctx))?;
        tweet.ok_or_else(|| {
            self.ctx.to_ctx_error(AppError::Generic {
                description: "tweet create returned no record".to_string(),
            })
        })
    }

    pub async fn update(&self, tweet_id: &str, content: &str) -> CtxResult<Tweet> {
        let thing = get_thing_of(tweet_id, TABLE_NAME).map_err(|err| self.ctx.to_ctx_error(err))?;
        if content.trim().is_empty() {
            return Err(self.ctx.to_ctx_error(AppError::Validation {
                description: "content required".to_string(),
            }));
        }
        record_exists(self.db, &thing)
            .await
            .map_err(|err| self.ctx.to_ctx_error(err))?;

        let mut res = self
            .db
            .query("UPDATE $id SET content=$content RETURN AFTER;")
            .bind(("id", thing))
            .bind(("content", content.to_string()))
            .await
            .map_err(CtxError::from(self.ctx))?;
        let updated = res
            .take::<Option<Tweet>>(0)
            .map_err(CtxError::from(self.ctx))?;
        with_not_found_err(updated, self.ctx, tweet_id)
    }

    pub async fn delete(&self, tweet_id: &str) -> CtxResult<()> {
        let thing = get_thing_of(tweet_id, TABLE_NAME).map_err(|err| self.ctx.to_ctx_error(err))?;
        // existence is checked first so a missing tweet fails without mutating
        record_exists(self.db, &thing)
            .await
            .map_err(|err| self.ctx.to_ctx_error(err))?;

        let _: Option<Tweet> = self
            .db
            .delete((TABLE_NAME, thing.id.to_raw()))
            .await
            .map_err(CtxError::from(self.ctx))?;
        Ok(())
    }

    pub async fn get_by_user(&self, user: &Thing) -> CtxResult<Vec<UserTweetView>> {
        get_entity_list_view::<UserTweetView>(
            self.db,
            TABLE_NAME,
            &IdentIdName::ColumnIdent {
                column: "created_by".to_string(),
                val: user.to_raw(),
                rec: true,
            },
            Some(Pagination {
                order_by: Some("created_at".to_string()),
                order_dir: Some(QryOrder::DESC),
                count: 0,
                start: 0,
            }),
        )
        .await
    }
}
