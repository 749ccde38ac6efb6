//! Standard response envelope: `{"data": ..., "meta": ...}` with camelCase keys.

use crate::case::{rekey, Case};
use crate::error::{ApiError, AppError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

/// Serialize `body` and convert its keys for the client.
fn camel_json<B: Serialize>(status: StatusCode, body: &B) -> Result<Response, AppError> {
    let mut value = serde_json::to_value(body).map_err(ApiError::from)?;
    rekey(&mut value, Case::Camel);
    Ok((status, Json(value)).into_response())
}

pub fn success_one<T: Serialize>(data: T) -> Result<Response, AppError> {
    camel_json(StatusCode::OK, &SuccessOne { data, meta: None })
}

pub fn success_created<T: Serialize>(data: T) -> Result<Response, AppError> {
    camel_json(StatusCode::CREATED, &SuccessOne { data, meta: None })
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> Result<Response, AppError> {
    let count = data.len() as u64;
    camel_json(
        StatusCode::OK,
        &SuccessMany {
            data,
            meta: MetaCount { count },
        },
    )
}

/// Body passed through without key conversion (maps keyed by data).
pub fn success_raw<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(SuccessOne { data, meta: None })).into_response()
}
