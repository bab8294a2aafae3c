use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use validator::Validate;

use crate::entities::tweet_entity::{Tweet, TweetDbService};
use crate::middleware::auth_with_login_access::AuthWithLoginAccess;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::JsonOrFormValidated;
use crate::middleware::utils::string_utils::get_thing_of;
use crate::models::view::user_tweet::UserTweetView;
use crate::models::web::ApiResponse;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/tweets", post(create_tweet))
        .route("/api/tweets/:tweet_id", patch(update_tweet))
        .route("/api/tweets/:tweet_id", delete(delete_tweet))
        .route("/api/users/:user_id/tweets", get(get_user_tweets))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TweetContentInput {
    #[validate(length(min = 1, message = "content required"))]
    pub content: String,
}

async fn create_tweet(
    auth_data: AuthWithLoginAccess,
    State(ctx_state): State<Arc<CtxState>>,
    JsonOrFormValidated(body): JsonOrFormValidated<TweetContentInput>,
) -> CtxResult<Json<ApiResponse<Tweet>>> {
    let created_by = auth_data.ctx.user_thing()?;
    let tweet = TweetDbService {
        db: &ctx_state.db.client,
        ctx: &auth_data.ctx,
    }
    .create(created_by, &body.content)
    .await?;

    Ok(Json(ApiResponse::ok(tweet, "Tweet posted successfully.")))
}

async fn update_tweet(
    auth_data: AuthWithLoginAccess,
    Path(tweet_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
    JsonOrFormValidated(body): JsonOrFormValidated<TweetContentInput>,
) -> CtxResult<Json<ApiResponse<Tweet>>> {
    let tweet = TweetDbService {
        db: &ctx_state.db.client,
        ctx: &auth_data.ctx,
    }
    .update(&tweet_id, &body.content)
    .await?;

    Ok(Json(ApiResponse::ok(tweet, "Tweet updated successfully.")))
}

async fn delete_tweet(
    auth_data: AuthWithLoginAccess,
    Path(tweet_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<()>>> {
    TweetDbService {
        db: &ctx_state.db.client,
        ctx: &auth_data.ctx,
    }
    .delete(&tweet_id)
    .await?;

    Ok(Json(ApiResponse::ok((), "Tweet deleted successfully.")))
}

async fn get_user_tweets(
    auth_data: AuthWithLoginAccess,
    Path(user_id): Path<String>,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<ApiResponse<Vec<UserTweetView>>>> {
    let owner = get_thing_of(&user_id, crate::entities::user_entity::TABLE_NAME)
        .map_err(|err| auth_data.ctx.to_ctx_error(err))?;
    let tweets = TweetDbService {
        db: &ctx_state.db.client,
        ctx: &auth_data.ctx,
    }
    .get_by_user(&owner)
    .await?;

    Ok(Json(ApiResponse::ok(tweets, "Tweets fetched successfully.")))
}
