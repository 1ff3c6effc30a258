//! Response Envelope
//!
//! Every endpoint answers with the same `{code, message, data}` shape that
//! existing mobile clients parse. Field names and codes must not change.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Content type served on every response
pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Message attached to every successful envelope
pub const SUCCESS_MESSAGE: &str = "成功";

/// Envelope status codes understood by clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Fail,
    NotFound,
    InternalServerError,
}

impl ResultCode {
    #[must_use]
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Fail => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }
}

/// Uniform response wrapper
///
/// `data` is always serialized, as `null` for failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: ResultCode::Success.as_u16(),
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Build a failure envelope carrying only a message
    #[must_use]
    pub fn fail(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            Json(self),
        )
            .into_response()
    }
}
