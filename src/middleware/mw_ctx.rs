use crate::config::AppConfig;
use crate::database::client::Database;
use crate::utils::jwt::JWT;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub const JWT_KEY: &str = "jwt";

pub struct CtxState {
    pub db: Database,
    pub jwt: JWT,
    pub is_development: bool,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CtxState")
    }
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        db,
        jwt: JWT::new(config.jwt_secret.clone(), chrono::Duration::days(7)),
        is_development: config.is_development,
    };
    Arc::new(ctx_state)
}
