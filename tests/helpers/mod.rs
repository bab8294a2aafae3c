pub mod like_helpers;
pub mod test_with_server;
pub mod tweet_helpers;
pub mod video_helpers;

use std::sync::Arc;

use cliptube_server::entities::user_entity::{CreateUser, LocalUser, LocalUserDbService};
use cliptube_server::middleware::ctx::Ctx;
use cliptube_server::middleware::mw_ctx::CtxState;
use fake::{faker, Fake};
use uuid::Uuid;

// fixture writes bypass the http surface, so they run under a synthetic ctx
#[allow(dead_code)]
pub fn fixture_ctx() -> Ctx {
    Ctx::new(Ok("fixtures".to_string()))
}

/// Creates a user record directly and mints a session token for it. Requests
/// authenticate by attaching the token as the jwt cookie.
#[allow(dead_code)]
pub async fn create_fake_login_test_user(ctx_state: &Arc<CtxState>) -> (LocalUser, String) {
    let ctx = fixture_ctx();
    let username = format!(
        "usr_{}",
        Uuid::new_v4().simple()
    );
    let user = LocalUserDbService {
        db: &ctx_state.db.client,
        ctx: &ctx,
    }
    .create(CreateUser {
        username,
        email: Some(faker::internet::en::FreeEmail().fake::<String>()),
        full_name: Some(faker::name::en::Name().fake::<String>()),
    })
    .await
    .expect("user fixture");

    let token = ctx_state
        .jwt
        .create_by_login(&user.id.as_ref().unwrap().to_raw())
        .expect("login token");

    (user, token)
}

#[derive(serde::Deserialize)]
struct CountRow {
    count: i64,
}

#[allow(dead_code)]
pub async fn count_rows(ctx_state: &Arc<CtxState>, table: &str) -> i64 {
    let mut res = ctx_state
        .db
        .client
        .query(format!("SELECT count() as count FROM {table} GROUP ALL;"))
        .await
        .expect("count query");
    let row: Option<CountRow> = res.take(0).expect("count row");
    row.map(|r| r.count).unwrap_or(0)
}
