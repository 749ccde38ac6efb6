//! Direct PostgreSQL transport for self-hosted deployments.

use super::Backend;
use crate::config::{self, Returns, DEFAULT_SCHEMA};
use crate::error::BackendError;
use crate::query::{Insert, Select, Update};
use crate::sql::{self, text_param, QueryBuf};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgDatabaseError, PgPoolOptions};
use sqlx::PgPool;

pub struct PgBackend {
    pool: PgPool,
    schema: String,
}

impl PgBackend {
    pub fn new(pool: PgPool) -> Self {
        PgBackend {
            pool,
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    pub async fn connect(database_url: &str) -> Result<Self, BackendError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    async fn query_rows(&self, q: &QueryBuf) -> Result<Vec<Value>, BackendError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, Value>(&q.sql);
        for p in &q.params {
            query = query.bind(text_param(p));
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl Backend for PgBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError> {
        self.query_rows(&sql::select(&self.schema, query)).await
    }

    async fn insert(&self, insert: &Insert) -> Result<Vec<Value>, BackendError> {
        self.query_rows(&sql::insert(&self.schema, insert)).await
    }

    async fn update(&self, update: &Update) -> Result<Vec<Value>, BackendError> {
        self.query_rows(&sql::update(&self.schema, update)).await
    }

    async fn rpc(&self, name: &str, args: Value) -> Result<Value, BackendError> {
        let proc = config::procedure(name).ok_or_else(|| {
            BackendError::new("42883", format!("function {}.{} does not exist", self.schema, name))
        })?;
        let q = sql::call(&self.schema, proc, &args);
        if proc.returns == Returns::Void {
            tracing::debug!(sql = %q.sql, params = ?q.params, "rpc");
            let mut query = sqlx::query(&q.sql);
            for p in &q.params {
                query = query.bind(text_param(p));
            }
            query.execute(&self.pool).await?;
            return Ok(Value::Null);
        }
        let rows = self.query_rows(&q).await?;
        Ok(rows.into_iter().next().unwrap_or(Value::Null))
    }

    async fn ping(&self) -> Result<(), BackendError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) => {
                let pg = db.try_downcast_ref::<PgDatabaseError>();
                BackendError {
                    code: db.code().map(|c| c.into_owned()),
                    message: Some(db.message().to_string()),
                    details: pg.and_then(|p| p.detail()).map(str::to_string),
                    hint: pg.and_then(|p| p.hint()).map(str::to_string),
                }
            }
            sqlx::Error::RowNotFound => BackendError::no_single_row(0),
            other => BackendError::transport(other.to_string()),
        }
    }
}
