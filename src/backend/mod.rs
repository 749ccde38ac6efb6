//! Transport to the relational backend.
//!
//! [`RestBackend`] talks to the hosted REST endpoint; [`PgBackend`] renders the
//! same operations to SQL for a direct connection. Both report failures as
//! [`BackendError`] so callers see one error shape.

mod postgres;
mod rest;

pub use postgres::PgBackend;
pub use rest::RestBackend;

use crate::error::BackendError;
use crate::query::{Insert, Select, Update};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Backend: Send + Sync {
    /// Rows matching the query, in the requested order.
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError>;

    /// Insert one row and return it as stored.
    async fn insert(&self, insert: &Insert) -> Result<Vec<Value>, BackendError>;

    /// Update matching rows and return them as stored.
    async fn update(&self, update: &Update) -> Result<Vec<Value>, BackendError>;

    /// Call a named server-side procedure with named arguments.
    async fn rpc(&self, name: &str, args: Value) -> Result<Value, BackendError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), BackendError>;
}

/// Exactly one row, or a `PGRST116` error carrying the row count.
pub fn single(rows: Vec<Value>) -> Result<Value, BackendError> {
    let n = rows.len();
    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (Some(row), None) => Ok(row),
        _ => Err(BackendError::no_single_row(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NO_SINGLE_ROW;
    use serde_json::json;

    #[test]
    fn single_row() {
        assert_eq!(single(vec![json!({"id": 1})]).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn zero_or_many_rows() {
        let err = single(vec![]).unwrap_err();
        assert!(err.has_code(NO_SINGLE_ROW));
        assert_eq!(err.details.as_deref(), Some("The result contains 0 rows"));
        let err = single(vec![json!(1), json!(2)]).unwrap_err();
        assert_eq!(err.details.as_deref(), Some("The result contains 2 rows"));
    }
}
