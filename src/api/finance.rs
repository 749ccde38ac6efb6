use super::{decode, keys, SiteApi};
use crate::backend::{self, Backend};
use crate::cache::QueryKey;
use crate::config::{FINANCIAL_REPORTS, GET_DONATION_STATS, GET_PROGRAM_IMPACT};
use crate::error::{ApiError, NO_SINGLE_ROW};
use crate::model::{DonationStats, FinancialReport, ProgramImpact};
use crate::query::Select;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

fn published_reports() -> Result<Select, ApiError> {
    Ok(Select::from(FINANCIAL_REPORTS)?
        .eq("is_published", true)?
        .order("fiscal_year", false)?)
}

impl SiteApi {
    /// Published reports, most recent fiscal year first.
    pub async fn financial_reports(&self) -> Result<Vec<FinancialReport>, ApiError> {
        let query = published_reports()?;
        decode(self.cached_rows(QueryKey::new(keys::FINANCIAL_REPORTS), query).await?)
    }

    /// Most recent published report. Unlike the other single-row reads, a
    /// missing row here is `None` rather than an error.
    pub async fn latest_financial_report(&self) -> Result<Option<FinancialReport>, ApiError> {
        let query = published_reports()?.limit(1);
        let backend = self.backend.clone();
        let value = self
            .cache
            .fetch(QueryKey::new(keys::LATEST_FINANCIAL_REPORT), move || latest(backend, query))
            .await?;
        decode(value)
    }

    /// Donation totals, optionally bounded by date.
    pub async fn donation_stats(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<DonationStats, ApiError> {
        let start = start.map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true));
        let end = end.map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true));
        let key = QueryKey::with(
            keys::DONATION_STATS,
            format!("{}|{}", start.as_deref().unwrap_or(""), end.as_deref().unwrap_or("")),
        );
        let value = self
            .cached_rpc(key, GET_DONATION_STATS, json!({ "start_date": start, "end_date": end }))
            .await?;
        let stats: Option<DonationStats> = decode(value)?;
        Ok(stats.unwrap_or_default())
    }

    pub async fn program_impact(&self) -> Result<ProgramImpact, ApiError> {
        let value = self
            .cached_rpc(QueryKey::new(keys::PROGRAM_IMPACT), GET_PROGRAM_IMPACT, json!({}))
            .await?;
        let impact: Option<ProgramImpact> = decode(value)?;
        Ok(impact.unwrap_or_default())
    }
}

async fn latest(backend: Arc<dyn Backend>, query: Select) -> Result<Value, ApiError> {
    let rows = backend.select(&query).await?;
    match backend::single(rows) {
        Ok(row) => Ok(row),
        Err(e) if e.has_code(NO_SINGLE_ROW) => Ok(Value::Null),
        Err(e) => Err(e.into()),
    }
}
