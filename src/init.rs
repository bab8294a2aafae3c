use crate::{
    entities::{
        comment_entity::CommentDbService, tweet_entity::TweetDbService,
        user_entity::LocalUserDbService, video_entity::VideoDbService,
    },
    middleware::{ctx::Ctx, error::AppResult, mw_ctx::CtxState},
    routes::{likes, tweets},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::database::client::Database;

pub async fn run_migrations(database: &Database) -> AppResult<()> {
    let db = database.client.clone();
    let c = Ctx::new(Ok("migrations".parse().unwrap()));

    LocalUserDbService { db: &db, ctx: &c }.mutate_db().await?;
    VideoDbService { db: &db, ctx: &c }.mutate_db().await?;
    CommentDbService { db: &db, ctx: &c }.mutate_db().await?;
    TweetDbService { db: &db, ctx: &c }.mutate_db().await?;
    database.run_migrations().await?;
    Ok(())
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .merge(likes::routes())
        .merge(tweets::routes())
        .with_state(ctx_state.clone())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
