//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SQLSTATE for unique constraint violations.
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for foreign key violations.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for insufficient privilege (row-level security, grants).
pub const INSUFFICIENT_PRIVILEGE: &str = "42501";
/// Backend code for a single-row request that matched zero or several rows.
pub const NO_SINGLE_ROW: &str = "PGRST116";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Error payload reported by the backend. Every field is optional because
/// transport failures and proxies do not always produce the full shape.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .message.as_deref().unwrap_or("backend error"))]
pub struct BackendError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl BackendError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        BackendError {
            code: Some(code.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Error without a backend code, e.g. a connection failure.
    pub fn transport(message: impl Into<String>) -> Self {
        BackendError {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn no_single_row(found: usize) -> Self {
        BackendError {
            code: Some(NO_SINGLE_ROW.into()),
            message: Some("JSON object requested, multiple (or no) rows returned".into()),
            details: Some(format!("The result contains {} rows", found)),
            hint: None,
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        BackendError::transport(e.to_string())
    }
}

/// User-facing error returned by the data-access functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Normalized backend error. `code` is kept for status mapping only.
    #[error("{message}")]
    Backend { message: String, code: Option<String> },
    #[error("{}", crate::normalize::ALREADY_SUBSCRIBED)]
    AlreadySubscribed,
    /// The backend answered with a shape that does not match the model.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Backend { code, .. } => code.as_deref(),
            ApiError::AlreadySubscribed => Some(UNIQUE_VIOLATION),
            ApiError::Decode(_) => None,
        }
    }
}

impl From<BackendError> for ApiError {
    fn from(e: BackendError) -> Self {
        ApiError::Backend {
            message: crate::normalize::normalize(&e),
            code: e.code,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Api(ApiError::AlreadySubscribed) => (StatusCode::CONFLICT, "already_subscribed"),
            AppError::Api(ApiError::Decode(_)) => (StatusCode::BAD_GATEWAY, "backend_shape"),
            AppError::Api(e) => match e.code() {
                Some(UNIQUE_VIOLATION) => (StatusCode::CONFLICT, "conflict"),
                Some(FOREIGN_KEY_VIOLATION) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_reference"),
                Some(INSUFFICIENT_PRIVILEGE) => (StatusCode::FORBIDDEN, "forbidden"),
                Some(NO_SINGLE_ROW) => (StatusCode::NOT_FOUND, "not_found"),
                _ => (StatusCode::BAD_GATEWAY, "backend_error"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        let message = match &self {
            AppError::Api(e) => e.to_string(),
            other => other.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
