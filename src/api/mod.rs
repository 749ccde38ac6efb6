//! Data access for the site: one function per entity read or form write.
//!
//! Reads go through the [`QueryCache`] under the same keys the page uses to
//! refresh them; writes bypass it and invalidate the key of the entity they
//! touch. Backend failures reach callers as normalized [`ApiError`]s.

mod content;
mod finance;
mod forms;
mod programs;

use crate::backend::Backend;
use crate::cache::{QueryCache, QueryKey};
use crate::error::ApiError;
use crate::query::Select;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Cache keys, one per read and one per written entity.
pub mod keys {
    pub const PROGRAM_CATEGORIES: &str = "programCategories";
    pub const PROGRAMS: &str = "programs";
    pub const PROGRAM: &str = "program";
    pub const FEATURED_PROGRAMS: &str = "featuredPrograms";
    pub const TRUSTEES: &str = "trustees";
    pub const FINANCIAL_REPORTS: &str = "financialReports";
    pub const LATEST_FINANCIAL_REPORT: &str = "latestFinancialReport";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const BLOG_POSTS: &str = "blogPosts";
    pub const BLOG_POST: &str = "blogPost";
    pub const SITE_SETTINGS: &str = "siteSettings";
    pub const DONATION_STATS: &str = "donationStats";
    pub const PROGRAM_IMPACT: &str = "programImpact";
    pub const SEARCH_PROGRAMS: &str = "searchPrograms";
    pub const CONTACT_INQUIRIES: &str = "contactInquiries";
    pub const VOLUNTEERS: &str = "volunteers";
    pub const NEWSLETTER_SUBSCRIBERS: &str = "newsletterSubscribers";
    pub const DONATIONS: &str = "donations";
}

/// Search terms this short are not sent to the backend.
pub const MIN_SEARCH_CHARS: usize = 3;

pub struct SiteApi {
    backend: Arc<dyn Backend>,
    cache: QueryCache,
}

impl SiteApi {
    pub fn new(backend: Arc<dyn Backend>, cache_ttl: Duration) -> Self {
        SiteApi {
            backend,
            cache: QueryCache::new(cache_ttl),
        }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Rows of `query` as a JSON array, through the cache.
    async fn cached_rows(&self, key: QueryKey, query: Select) -> Result<Value, ApiError> {
        let backend = self.backend.clone();
        self.cache.fetch(key, move || select_rows(backend, query)).await
    }

    /// Exactly one row of `query`, through the cache.
    async fn cached_single(&self, key: QueryKey, query: Select) -> Result<Value, ApiError> {
        let backend = self.backend.clone();
        self.cache.fetch(key, move || select_single(backend, query)).await
    }

    /// Procedure result, through the cache.
    async fn cached_rpc(&self, key: QueryKey, name: &'static str, args: Value) -> Result<Value, ApiError> {
        let backend = self.backend.clone();
        self.cache.fetch(key, move || call(backend, name, args)).await
    }
}

async fn select_rows(backend: Arc<dyn Backend>, query: Select) -> Result<Value, ApiError> {
    tracing::debug!(table = query.table.name, "select");
    Ok(Value::Array(backend.select(&query).await?))
}

async fn select_single(backend: Arc<dyn Backend>, query: Select) -> Result<Value, ApiError> {
    tracing::debug!(table = query.table.name, "select single");
    let rows = backend.select(&query).await?;
    Ok(crate::backend::single(rows)?)
}

async fn call(backend: Arc<dyn Backend>, name: &'static str, args: Value) -> Result<Value, ApiError> {
    tracing::debug!(procedure = name, "rpc");
    Ok(backend.rpc(name, args).await?)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

