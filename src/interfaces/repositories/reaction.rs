use crate::entities::reaction_entity::ReactionTargetKind;
use crate::middleware::error::AppResult;
use async_trait::async_trait;
use surrealdb::sql::Thing;

#[async_trait]
pub trait ReactionsRepositoryInterface {
    /// Creates the reaction when absent, deletes it when present. Returns
    /// whether the actor likes the target after the call. A racing duplicate
    /// create surfaces as `AppError::Conflict`.
    async fn toggle(
        &self,
        actor: Thing,
        kind: ReactionTargetKind,
        target: Thing,
    ) -> AppResult<bool>;
}
