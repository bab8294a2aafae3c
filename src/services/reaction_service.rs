use crate::database::client::Db;
use crate::database::table_names::LIKE_TABLE_NAME;
use crate::entities::reaction_entity::ReactionTargetKind;
use crate::interfaces::repositories::reaction::ReactionsRepositoryInterface;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::utils::db_utils::{
    get_entity_list_view, record_exists, IdentIdName, Pagination, QryOrder,
};
use crate::middleware::utils::string_utils::{get_str_thing, get_thing_of};
use crate::models::view::liked_video::{LikedVideoRow, LikedVideoView};

pub struct ReactionService<'a> {
    db: &'a Db,
    ctx: &'a Ctx,
    reactions_repository: &'a (dyn ReactionsRepositoryInterface + Send + Sync),
}

impl<'a> ReactionService<'a> {
    pub fn new(
        db: &'a Db,
        ctx: &'a Ctx,
        reactions_repository: &'a (dyn ReactionsRepositoryInterface + Send + Sync),
    ) -> Self {
        Self {
            db,
            ctx,
            reactions_repository,
        }
    }

    /// Toggles the actor's reaction on the target. Returns whether the target
    /// is liked after the call.
    pub async fn toggle(
        &self,
        user_id: &str,
        kind: ReactionTargetKind,
        target_id: &str,
    ) -> CtxResult<bool> {
        let target =
            get_thing_of(target_id, kind.table_name()).map_err(|err| self.ctx.to_ctx_error(err))?;
        record_exists(self.db, &target)
            .await
            .map_err(|err| self.ctx.to_ctx_error(err))?;
        let actor = get_str_thing(user_id).map_err(|err| self.ctx.to_ctx_error(err))?;

        match self.reactions_repository.toggle(actor, kind, target).await {
            Ok(is_liked) => Ok(is_liked),
            // the racing writer created the reaction first; the target is liked
            Err(AppError::Conflict { .. }) => Ok(true),
            Err(err) => Err(self.ctx.to_ctx_error(err)),
        }
    }

    /// Builds the liked-videos view for the calling actor: published videos
    /// only, newest reaction first.
    pub async fn get_liked_videos(&self, user_id: &str) -> CtxResult<Vec<LikedVideoView>> {
        let actor = get_str_thing(user_id).map_err(|err| self.ctx.to_ctx_error(err))?;
        let ident = IdentIdName::ColumnIdentAnd(vec![
            IdentIdName::ColumnIdent {
                column: "in".to_string(),
                val: actor.to_raw(),
                rec: true,
            },
            IdentIdName::ColumnIdent {
                column: "kind".to_string(),
                val: ReactionTargetKind::Video.to_string(),
                rec: false,
            },
            IdentIdName::ColumnFlag {
                column: "out.is_published".to_string(),
                val: true,
            },
        ]);

        let rows = get_entity_list_view::<LikedVideoRow>(
            self.db,
            LIKE_TABLE_NAME,
            &ident,
            Some(Pagination {
                order_by: Some("created_at".to_string()),
                order_dir: Some(QryOrder::DESC),
                count: 0,
                start: 0,
            }),
        )
        .await?;

        Ok(rows.into_iter().map(LikedVideoView::from).collect())
    }
}
