use serde::{Deserialize, Serialize};

/// Response envelope: `{statusCode, data, message}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            status_code: 200,
            data,
            message: message.into(),
        }
    }
}
