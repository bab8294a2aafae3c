use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::entities::reaction_entity::ReactionTargetKind;
use crate::middleware::auth_with_login_access::AuthWithLoginAccess;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::models::view::liked_video::LikedVideoView;
use crate::models::web::ApiResponse;
use crate::services::reaction_service::ReactionService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/likes/video/:video_id", post(toggle_video_like))
        .route("/api/likes/comment/:comment_id", post(toggle_comment_like))
        .route("/api/likes/tweet/:tweet_id", post(toggle_tweet_like))
        .route("/api/likes/videos", get(get_liked_videos))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleLikeResponse {
    pub is_liked: bool,
}

async fn toggle_like(
    ctx_state: &Arc<CtxState>,
    auth_data: AuthWithLoginAccess,
    kind: ReactionTargetKind,
    target_id: &str,
) -> CtxResult<Json<ApiResponse<ToggleLikeResponse>>> {
    let is_liked = ReactionService::new(
        &ctx_state.db.client,
        &auth_data.ctx,
        ctx_state.db.reactions.as_ref(),
    )
    .toggle(&auth_data.user_id, kind, target_id)
    .await?;

    Ok(Json(ApiResponse::ok(
        ToggleLikeResponse { is_liked },
        "Toggled successfully.",
    )))
}

async fn toggle_video_like(
    auth_data: AuthWithLoginAccess,
    Path(video_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<ToggleLikeResponse>>> {
    toggle_like(&ctx_state, auth_data, ReactionTargetKind::Video, &video_id).await
}

async fn toggle_comment_like(
    auth_data: AuthWithLoginAccess,
    Path(comment_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<ToggleLikeResponse>>> {
    toggle_like(
        &ctx_state,
        auth_data,
        ReactionTargetKind::Comment,
        &comment_id,
    )
    .await
}

async fn toggle_tweet_like(
    auth_data: AuthWithLoginAccess,
    Path(tweet_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<ToggleLikeResponse>>> {
    toggle_like(&ctx_state, auth_data, ReactionTargetKind::Tweet, &tweet_id).await
}

async fn get_liked_videos(
    auth_data: AuthWithLoginAccess,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<Vec<LikedVideoView>>>> {
    let videos = ReactionService::new(
        &ctx_state.db.client,
        &auth_data.ctx,
        ctx_state.db.reactions.as_ref(),
    )
    .get_liked_videos(&auth_data.user_id)
    .await?;

    let message = if videos.is_empty() {
        "Nobody liked any video till now."
    } else {
        "All liked videos fetched."
    };
    Ok(Json(ApiResponse::ok(videos, message)))
}
