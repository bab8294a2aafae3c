use crate::database::client::Db;
use crate::database::table_names::{
    COMMENT_TABLE_NAME, LIKE_TABLE_NAME, TWEET_TABLE_NAME, USER_TABLE_NAME, VIDEO_TABLE_NAME,
};
use crate::entities::reaction_entity::ReactionTargetKind;
use crate::interfaces::repositories::reaction::ReactionsRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use surrealdb::sql::Thing;

const INDEX_IN_KIND_OUT: &str = "in_kind_out_unique_idx";

#[derive(Debug)]
pub struct ReactionsRepository {
    client: Arc<Db>,
}

impl ReactionsRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("

    DEFINE TABLE IF NOT EXISTS {LIKE_TABLE_NAME} TYPE RELATION IN {USER_TABLE_NAME} OUT {VIDEO_TABLE_NAME}|{COMMENT_TABLE_NAME}|{TWEET_TABLE_NAME} ENFORCED SCHEMAFULL PERMISSIONS NONE;
    DEFINE FIELD IF NOT EXISTS kind ON TABLE {LIKE_TABLE_NAME} TYPE string ASSERT $value IN ['video', 'comment', 'tweet'];
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {LIKE_TABLE_NAME} TYPE datetime DEFAULT time::now();
    DEFINE INDEX IF NOT EXISTS {INDEX_IN_KIND_OUT} ON {LIKE_TABLE_NAME} FIELDS in, kind, out UNIQUE;

    ");
        let mutation = self.client.query(sql).await?;

        mutation.check().expect("should mutate ReactionsRepository");

        Ok(())
    }

    fn map_toggle_err(err: surrealdb::Error) -> AppError {
        let source = err.to_string();
        if source.contains(INDEX_IN_KIND_OUT) {
            AppError::Conflict {
                description: "reaction already exists".to_string(),
            }
        } else {
            AppError::SurrealDb { source }
        }
    }
}

#[async_trait]
impl ReactionsRepositoryInterface for ReactionsRepository {
    async fn toggle(
        &self,
        actor: Thing,
        kind: ReactionTargetKind,
        target: Thing,
    ) -> AppResult<bool> {
        let res = self
            .client
            .query(format!(
                "BEGIN TRANSACTION; \
                LET $existing = (SELECT id FROM {LIKE_TABLE_NAME} WHERE in=$in AND kind=$kind AND out=$out)[0].id; \
                IF $existing THEN (DELETE $existing) ELSE (RELATE $in->{LIKE_TABLE_NAME}->$out SET kind=$kind) END; \
                RETURN $existing IS NONE; \
                COMMIT TRANSACTION;"
            ))
            .bind(("in", actor))
            .bind(("kind", kind))
            .bind(("out", target))
            .await;

        let mut res = res.map_err(Self::map_toggle_err)?;
        let is_liked = res
            .take::<Option<bool>>(res.num_statements() - 1)
            .map_err(Self::map_toggle_err)?
            .unwrap_or(false);
        Ok(is_liked)
    }
}
