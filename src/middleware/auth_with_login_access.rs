use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::middleware::error::{AppError, CtxError};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};

use super::ctx::Ctx;

#[derive(Debug)]
pub struct AuthWithLoginAccess {
    pub user_id: String,
    pub ctx: Ctx,
}

#[async_trait]
impl FromRequestParts<Arc<CtxState>> for AuthWithLoginAccess {
    type Rejection = CtxError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state): State<Arc<CtxState>> = State::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                CtxError::from_err(AppError::Generic {
                    description: err.to_string(),
                })
            })?;

        let cookies = CookieJar::from_headers(&parts.headers);
        let cookie = cookies
            .get(JWT_KEY)
            .ok_or_else(|| CtxError::from_err(AppError::AuthFailNoJwtCookie))?;

        let claims = app_state
            .jwt
            .decode(cookie.value())
            .map_err(CtxError::from_err)?;

        Ok(AuthWithLoginAccess {
            user_id: claims.auth.clone(),
            ctx: Ctx::new(Ok(claims.auth)),
        })
    }
}
