//! API Errors
//!
//! Failure kinds a backend call can end with.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// HTTP 404
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-2xx response
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The body was not the JSON we expected
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub(crate) fn transport(err: JsValue) -> Self {
        ApiError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}
