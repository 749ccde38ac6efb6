//! Read handlers: one per data-access function.

use crate::error::AppError;
use crate::response::{success_many, success_one, success_raw};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct ProgramsQuery {
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// RFC 3339 timestamp or a plain date (midnight UTC).
fn parse_instant(name: &str, s: &str) -> Result<DateTime<Utc>, AppError> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a date or RFC 3339 timestamp", name)))
}

fn optional_instant(name: &str, s: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    s.filter(|s| !s.trim().is_empty())
        .map(|s| parse_instant(name, s))
        .transpose()
}

pub async fn program_categories(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.program_categories().await?)
}

pub async fn programs(
    State(state): State<AppState>,
    Query(query): Query<ProgramsQuery>,
) -> Result<Response, AppError> {
    success_many(state.api.programs(query.category_id).await?)
}

pub async fn featured_programs(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.featured_programs().await?)
}

pub async fn program(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response, AppError> {
    let program = state
        .api
        .program(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(slug))?;
    success_one(program)
}

pub async fn trustees(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.trustees().await?)
}

pub async fn financial_reports(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.financial_reports().await?)
}

/// `data` is null when nothing is published yet.
pub async fn latest_financial_report(State(state): State<AppState>) -> Result<Response, AppError> {
    success_one(state.api.latest_financial_report().await?)
}

pub async fn testimonials(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.testimonials().await?)
}

pub async fn blog_posts(State(state): State<AppState>) -> Result<Response, AppError> {
    success_many(state.api.blog_posts().await?)
}

pub async fn blog_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response, AppError> {
    let post = state
        .api
        .blog_post(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(slug))?;
    success_one(post)
}

/// Setting keys are data, so they are returned as stored.
pub async fn site_settings(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success_raw(state.api.site_settings().await?))
}

pub async fn donation_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Response, AppError> {
    let start = optional_instant("start_date", query.start_date.as_deref())?;
    let end = optional_instant("end_date", query.end_date.as_deref())?;
    success_one(state.api.donation_stats(start, end).await?)
}

pub async fn program_impact(State(state): State<AppState>) -> Result<Response, AppError> {
    success_one(state.api.program_impact().await?)
}

/// `data` is null when the term is too short to search.
pub async fn search_programs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    match state.api.search_programs(query.q.trim()).await? {
        Some(hits) => success_many(hits),
        None => success_one(Option::<()>::None),
    }
}
