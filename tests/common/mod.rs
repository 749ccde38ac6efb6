//! In-memory backend for integration tests: evaluates filters, ordering,
//! limits and embeds over fixture rows, and records procedure calls.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use nazma_trust_web::backend::Backend;
use nazma_trust_web::config;
use nazma_trust_web::error::{BackendError, UNIQUE_VIOLATION};
use nazma_trust_web::query::{Filter, Insert, Op, Select, Update};
use nazma_trust_web::SiteApi;
use serde_json::{json, Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

#[derive(Default)]
pub struct FakeBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    table_errors: Mutex<HashMap<String, BackendError>>,
    rpc_results: Mutex<HashMap<String, Result<Value, BackendError>>>,
    rpc_calls: Mutex<Vec<(String, Value)>>,
    selects: AtomicUsize,
    down: bool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose every call fails as a transport error.
    pub fn unreachable() -> Self {
        FakeBackend {
            down: true,
            ..Self::default()
        }
    }

    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
        self
    }

    /// Every read and write against `table` fails with `error`.
    pub fn failing(self, table: &str, error: BackendError) -> Self {
        self.table_errors.lock().unwrap().insert(table.to_string(), error);
        self
    }

    pub fn with_rpc(self, name: &str, result: Result<Value, BackendError>) -> Self {
        self.rpc_results.lock().unwrap().insert(name.to_string(), result);
        self
    }

    pub fn rpc_calls(&self) -> Vec<(String, Value)> {
        self.rpc_calls.lock().unwrap().clone()
    }

    pub fn select_count(&self) -> usize {
        self.selects.load(AtomicOrdering::SeqCst)
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.lock().unwrap().get(table).cloned().unwrap_or_default()
    }

    fn check(&self, table: &str) -> Result<(), BackendError> {
        if self.down {
            return Err(BackendError::transport("error sending request: connection refused"));
        }
        match self.table_errors.lock().unwrap().get(table) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

fn matches(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|f| {
        let v = row.get(f.column).unwrap_or(&Value::Null);
        match f.op {
            Op::Eq => v == &f.value,
            Op::Lte => compare(v, &f.value) != Ordering::Greater && !v.is_null(),
        }
    })
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .unwrap_or_default()
            .partial_cmp(&y.as_f64().unwrap_or_default())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        // Nulls sort last ascending, as in PostgreSQL.
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn defaults(table: &str) -> Value {
    let now = Utc::now().to_rfc3339();
    let mut row = json!({ "id": Uuid::new_v4(), "created_at": now, "updated_at": now });
    let extra = match table {
        config::CONTACT_INQUIRIES => json!({ "status": "new", "is_spam": false }),
        config::VOLUNTEERS => json!({ "status": "applied", "application_date": now, "is_active": true }),
        config::NEWSLETTER_SUBSCRIBERS => json!({
            "is_subscribed": true,
            "subscription_date": now,
            "email_verified": false,
            "double_opt_in": false,
            "frequency_preference": "weekly"
        }),
        config::DONATIONS => json!({
            "currency": "INR",
            "status": "pending",
            "is_recurring": false,
            "is_80g_eligible": true,
            "is_anonymous": false
        }),
        _ => json!({}),
    };
    merge(&mut row, extra.as_object().cloned().unwrap_or_default());
    row
}

fn merge(row: &mut Value, fields: Map<String, Value>) {
    if let Value::Object(obj) = row {
        obj.extend(fields);
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError> {
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);
        self.check(query.table.name)?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables
            .get(query.table.name)
            .map(|rows| rows.iter().filter(|r| matches(r, &query.filters)).cloned().collect())
            .unwrap_or_default();
        for order in query.order.iter().rev() {
            rows.sort_by(|a, b| {
                let o = compare(
                    a.get(order.column).unwrap_or(&Value::Null),
                    b.get(order.column).unwrap_or(&Value::Null),
                );
                if order.ascending {
                    o
                } else {
                    o.reverse()
                }
            });
        }
        if let Some(n) = query.limit {
            rows.truncate(n as usize);
        }
        for row in rows.iter_mut() {
            for name in &query.embeds {
                let Some(rel) = query.table.relation(name) else { continue };
                let key = row.get(rel.our_key_column).cloned().unwrap_or(Value::Null);
                let related = tables
                    .get(rel.related_table)
                    .and_then(|rs| rs.iter().find(|r| !key.is_null() && r.get(rel.their_key_column) == Some(&key)))
                    .cloned()
                    .unwrap_or(Value::Null);
                let mut field = Map::new();
                field.insert(rel.name.to_string(), related);
                merge(row, field);
            }
        }
        Ok(rows)
    }

    async fn insert(&self, insert: &Insert) -> Result<Vec<Value>, BackendError> {
        let table = insert.table.name;
        self.check(table)?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        if table == config::NEWSLETTER_SUBSCRIBERS {
            let email = insert.row.get("email");
            if rows.iter().any(|r| r.get("email") == email) {
                return Err(BackendError {
                    code: Some(UNIQUE_VIOLATION.into()),
                    message: Some(
                        "duplicate key value violates unique constraint \"newsletter_subscribers_email_key\"".into(),
                    ),
                    details: Some("Key (email) already exists.".into()),
                    hint: None,
                });
            }
        }
        let mut row = defaults(table);
        merge(&mut row, insert.row.clone());
        rows.push(row.clone());
        Ok(vec![row])
    }

    async fn update(&self, update: &Update) -> Result<Vec<Value>, BackendError> {
        self.check(update.table.name)?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(update.table.name.to_string()).or_default();
        let mut changed = Vec::new();
        for row in rows.iter_mut().filter(|r| matches(r, &update.filters)) {
            merge(row, update.set.clone());
            changed.push(row.clone());
        }
        Ok(changed)
    }

    async fn rpc(&self, name: &str, args: Value) -> Result<Value, BackendError> {
        if self.down {
            return Err(BackendError::transport("error sending request: connection refused"));
        }
        self.rpc_calls.lock().unwrap().push((name.to_string(), args));
        self.rpc_results
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }

    async fn ping(&self) -> Result<(), BackendError> {
        self.check(config::SITE_SETTINGS)
    }
}

/// Data access without result reuse, so every call reaches the backend.
pub fn api(backend: &Arc<FakeBackend>) -> SiteApi {
    SiteApi::new(backend.clone(), Duration::ZERO)
}

const STAMP: &str = "2025-01-01T00:00:00+00:00";

pub fn category(title: &str, objective: &str, display_order: i32, is_active: bool) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "objective_type": objective,
        "title": title,
        "description": format!("{} programs", title),
        "display_order": display_order,
        "is_active": is_active,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn program(category: &Value, title: &str, slug: &str, display_order: i32, featured: bool, public: bool) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "category_id": category["id"],
        "title": title,
        "slug": slug,
        "description": format!("About {}", title),
        "short_description": format!("{} in brief", title),
        "status": "active",
        "beneficiaries_count": 120,
        "display_order": display_order,
        "is_featured": featured,
        "is_public": public,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn trustee(name: &str, role: &str, display_order: i32, public: bool, active: bool) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "full_name": name,
        "role": role,
        "bio": format!("{} serves as {}", name, role),
        "display_order": display_order,
        "is_public": public,
        "is_active": active,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn report(fiscal_year: &str, published: bool, income: f64, expenses: f64) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "fiscal_year": fiscal_year,
        "report_type": "annual",
        "title": format!("Annual Report {}", fiscal_year),
        "total_income": income,
        "total_expenses": expenses,
        "income_breakdown": { "individual_donations": income },
        "fcra_compliance": false,
        "is_published": published,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn post(title: &str, slug: &str, published: bool, published_date: &str, author: Option<&Value>) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "title": title,
        "slug": slug,
        "content": format!("{} body", title),
        "author_id": author.map(|a| a["id"].clone()),
        "is_published": published,
        "published_date": published_date,
        "view_count": 0,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn testimonial(author: &str, program: Option<&Value>, approved: bool, display_order: i32) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "author_name": author,
        "testimonial_text": format!("{} says thanks", author),
        "rating": 5,
        "program_id": program.map(|p| p["id"].clone()),
        "is_approved": approved,
        "is_featured": false,
        "display_order": display_order,
        "is_public": true,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}

pub fn setting(key: &str, value: Option<&str>, public: bool) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "setting_key": key,
        "setting_value": value,
        "setting_type": "text",
        "is_public": public,
        "created_at": STAMP,
        "updated_at": STAMP
    })
}
