use uuid::Uuid;

use super::error::{AppError, AppResult, CtxError, CtxResult};
use crate::middleware::utils::string_utils::get_str_thing;
use surrealdb::sql::Thing;

#[derive(Clone, Debug)]
pub struct Ctx {
    result_user_id: AppResult<String>,
    req_id: Uuid,
}

impl Ctx {
    pub fn new(result_user_id: AppResult<String>) -> Self {
        Self {
            result_user_id,
            req_id: Uuid::new_v4(),
        }
    }

    pub fn req_id(&self) -> Uuid {
        self.req_id
    }

    pub fn user_id(&self) -> CtxResult<String> {
        self.result_user_id.clone().map_err(|error| CtxError {
            error,
            req_id: self.req_id,
        })
    }

    pub fn user_thing(&self) -> CtxResult<Thing> {
        let id = self.user_id()?;
        get_str_thing(&id).map_err(|err| self.to_ctx_error(err))
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError {
            req_id: self.req_id,
            error,
        }
    }
}
