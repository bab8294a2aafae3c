use std::fmt;

use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::ctx::Ctx;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    InvalidIdentifier { ident: String },
    Validation { description: String },
    EntityFailIdNotFound { ident: String },
    Conflict { description: String },
    AuthFailNoJwtCookie,
    AuthFailJwtInvalid { source: String },
    SurrealDb { source: String },
}

/// CtxError carries the req_id reported to the client and implements IntoResponse.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error before a req_id is attached.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

// for slightly less verbose error mappings
impl CtxError {
    pub fn from<T: Into<AppError>>(ctx: &Ctx) -> impl FnOnce(T) -> CtxError + '_ {
        |err| CtxError {
            req_id: ctx.req_id(),
            error: err.into(),
        }
    }

    /// For failures before a request ctx exists, e.g. extractor rejections.
    pub fn from_err(error: impl Into<AppError>) -> CtxError {
        CtxError {
            req_id: Uuid::new_v4(),
            error: error.into(),
        }
    }
}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

impl From<surrealdb::Error> for CtxError {
    fn from(value: surrealdb::Error) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value.into(),
        }
    }
}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::InvalidIdentifier { ident } => write!(f, "Invalid identifier {ident}"),
            Self::Validation { description } => write!(f, "{description}"),
            Self::EntityFailIdNotFound { ident } => write!(f, "Record id= {ident} not found"),
            Self::Conflict { description } => write!(f, "{description}"),
            Self::AuthFailNoJwtCookie => write!(f, "You are not logged in"),
            Self::AuthFailJwtInvalid { .. } => {
                write!(f, "The provided JWT token is not valid")
            }
            // storage fault details are logged, never rendered to the caller
            Self::SurrealDb { .. } => write!(f, "{INTERNAL}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseBody {
    pub status_code: u16,
    pub message: String,
    pub req_id: String,
}

impl ErrorResponseBody {
    pub fn new(status_code: u16, message: String, req_id: Option<String>) -> Self {
        ErrorResponseBody {
            status_code,
            message,
            req_id: req_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

impl From<ErrorResponseBody> for String {
    fn from(value: ErrorResponseBody) -> Self {
        serde_json::to_string(&value).unwrap()
    }
}

// REST error response
impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        if let AppError::SurrealDb { ref source } = self.error {
            tracing::error!(req_id = %self.req_id, source, "storage error");
        }
        let status_code = match self.error {
            AppError::EntityFailIdNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::InvalidIdentifier { .. }
            | AppError::Validation { .. }
            | AppError::Generic { .. } => StatusCode::BAD_REQUEST,
            AppError::AuthFailNoJwtCookie | AppError::AuthFailJwtInvalid { .. } => {
                StatusCode::FORBIDDEN
            }
            AppError::SurrealDb { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let err = self.error.clone();
        let body: String = ErrorResponseBody::new(
            status_code.as_u16(),
            self.error.to_string(),
            Some(self.req_id.to_string()),
        )
        .into();
        let mut response = (status_code, body).into_response();
        // keep the real error around for request tracing
        response.extensions_mut().insert(err);
        response
    }
}

// External Errors
impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::AuthFailJwtInvalid {
            source: value.to_string(),
        }
    }
}
