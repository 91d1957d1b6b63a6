use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope every endpoint answers with.
///
/// `code` mirrors HTTP semantics (200, 401, 403, 404, 405, 429, 500) while the
/// transport status stays 200, which is what the web client checks against.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            msg: msg.into(),
            data: Some(data),
        }
    }
}

/// Envelope for failures; `data` is always `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApiErrorDto {
    pub code: u16,
    pub msg: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ApiErrorDto {
    pub fn new(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}
