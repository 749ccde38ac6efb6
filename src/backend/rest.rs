//! REST transport: renders queries to the hosted endpoint's URL conventions.

use super::Backend;
use crate::config::{self, BackendConfig};
use crate::error::{BackendError, ConfigError};
use crate::query::{Filter, Insert, Select, Update};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

const REST_PATH: &str = "rest/v1/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RestBackend {
    http: reqwest::Client,
    base: Url,
    schema: String,
}

impl RestBackend {
    /// Shared handle for all requests. Validation has already happened in
    /// [`BackendConfig::new`]; this only fails on unusable header values.
    pub fn new(config: &BackendConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(&format!("{}/", config.url))
            .and_then(|u| u.join(REST_PATH))
            .map_err(|e| ConfigError::Invalid {
                name: "SUPABASE_URL",
                reason: e.to_string(),
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), header_value("SUPABASE_ANON_KEY", &config.anon_key)?);
        headers.insert(
            AUTHORIZATION,
            header_value("SUPABASE_ANON_KEY", &format!("Bearer {}", config.anon_key))?,
        );
        headers.insert(
            HeaderName::from_static("x-application-name"),
            header_value("application name", &config.application_name)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::Invalid {
                name: "http client",
                reason: e.to_string(),
            })?;

        Ok(RestBackend {
            http,
            base,
            schema: config.schema.clone(),
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, BackendError> {
        self.base
            .join(table)
            .map_err(|e| BackendError::transport(e.to_string()))
    }

    pub(crate) fn select_url(&self, q: &Select) -> Result<Url, BackendError> {
        let mut url = self.table_url(q.table.name)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", &select_clause(q));
            for (column, value) in filter_pairs(&q.filters) {
                pairs.append_pair(column, &value);
            }
            if !q.order.is_empty() {
                let order = q
                    .order
                    .iter()
                    .map(|o| format!("{}.{}", o.column, if o.ascending { "asc" } else { "desc" }))
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.append_pair("order", &order);
            }
            if let Some(n) = q.limit {
                pairs.append_pair("limit", &n.to_string());
            }
        }
        Ok(url)
    }

    pub(crate) fn update_url(&self, u: &Update) -> Result<Url, BackendError> {
        let mut url = self.table_url(u.table.name)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (column, value) in filter_pairs(&u.filters) {
                pairs.append_pair(column, &value);
            }
        }
        Ok(url)
    }

    async fn rows(&self, request: reqwest::RequestBuilder) -> Result<Vec<Value>, BackendError> {
        let resp = check_response(request.send().await?).await?;
        let rows: Vec<Value> = resp
            .json()
            .await
            .map_err(|e| BackendError::transport(format!("invalid response body: {}", e)))?;
        Ok(rows)
    }

    fn write_request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("Content-Profile", &self.schema)
            .header("Prefer", "return=representation")
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError> {
        let url = self.select_url(query)?;
        tracing::debug!(url = %url, "select");
        self.rows(self.http.get(url).header("Accept-Profile", &self.schema)).await
    }

    async fn insert(&self, insert: &Insert) -> Result<Vec<Value>, BackendError> {
        let url = self.table_url(insert.table.name)?;
        tracing::debug!(url = %url, "insert");
        let body = Value::Array(vec![Value::Object(insert.row.clone())]);
        self.rows(self.write_request(reqwest::Method::POST, url).json(&body)).await
    }

    async fn update(&self, update: &Update) -> Result<Vec<Value>, BackendError> {
        let url = self.update_url(update)?;
        tracing::debug!(url = %url, "update");
        let body = Value::Object(update.set.clone());
        self.rows(self.write_request(reqwest::Method::PATCH, url).json(&body)).await
    }

    async fn rpc(&self, name: &str, args: Value) -> Result<Value, BackendError> {
        if config::procedure(name).is_none() {
            return Err(BackendError::new(
                "PGRST202",
                format!("Could not find the function public.{}", name),
            ));
        }
        let url = self.table_url(&format!("rpc/{}", name))?;
        tracing::debug!(url = %url, "rpc");
        let resp = self
            .http
            .post(url)
            .header("Content-Profile", &self.schema)
            .json(&args)
            .send()
            .await?;
        let text = check_response(resp).await?.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| BackendError::transport(format!("invalid response body: {}", e)))
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let q = Select::from(config::SITE_SETTINGS)?.limit(1);
        self.select(&q).await.map(|_| ())
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

/// `*` plus one `name:table(*)` entry per embedded relation.
fn select_clause(q: &Select) -> String {
    let mut out = String::from("*");
    for name in &q.embeds {
        if let Some(r) = q.table.relation(name) {
            out.push_str(&format!(",{}:{}(*)", r.name, r.related_table));
        }
    }
    out
}

/// `column=op.value` pairs.
fn filter_pairs(filters: &[Filter]) -> Vec<(&'static str, String)> {
    filters
        .iter()
        .map(|f| (f.column, format!("{}.{}", f.op.as_str(), render_value(&f.value))))
        .collect()
}

fn render_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "null".into(),
        other => other.to_string(),
    }
}

/// Pass successful responses through; decode the backend's error payload otherwise.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

fn error_from_body(status: reqwest::StatusCode, body: &str) -> BackendError {
    match serde_json::from_str::<BackendError>(body) {
        Ok(e) if e.code.is_some() || e.message.is_some() => e,
        _ => BackendError {
            code: Some(status.as_u16().to_string()),
            message: Some(if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body.trim().to_string()
            }),
            details: None,
            hint: None,
        },
    }
}
