use super::{decode, keys, SiteApi, MIN_SEARCH_CHARS};
use crate::cache::QueryKey;
use crate::config::{PROGRAMS, PROGRAM_CATEGORIES, SEARCH_PROGRAMS};
use crate::error::ApiError;
use crate::model::{Program, ProgramCategory, ProgramSearchHit};
use crate::query::Select;
use serde_json::json;
use uuid::Uuid;

impl SiteApi {
    /// Active categories in display order.
    pub async fn program_categories(&self) -> Result<Vec<ProgramCategory>, ApiError> {
        let query = Select::from(PROGRAM_CATEGORIES)?
            .eq("is_active", true)?
            .order("display_order", true)?;
        decode(self.cached_rows(QueryKey::new(keys::PROGRAM_CATEGORIES), query).await?)
    }

    /// Public programs with their category, optionally narrowed to one category.
    pub async fn programs(&self, category_id: Option<Uuid>) -> Result<Vec<Program>, ApiError> {
        let mut query = Select::from(PROGRAMS)?
            .embed("category")?
            .eq("is_public", true)?
            .order("display_order", true)?;
        if let Some(id) = category_id {
            query = query.eq("category_id", id.to_string())?;
        }
        let key = QueryKey::with(
            keys::PROGRAMS,
            category_id.map(|id| id.to_string()).unwrap_or_default(),
        );
        decode(self.cached_rows(key, query).await?)
    }

    /// Public program by slug. A slug that matches nothing is an error; an
    /// empty slug is not looked up at all.
    pub async fn program(&self, slug: &str) -> Result<Option<Program>, ApiError> {
        if slug.is_empty() {
            return Ok(None);
        }
        let query = Select::from(PROGRAMS)?
            .embed("category")?
            .eq("slug", slug)?
            .eq("is_public", true)?;
        let row = self.cached_single(QueryKey::with(keys::PROGRAM, slug), query).await?;
        decode(row).map(Some)
    }

    /// Up to three featured public programs.
    pub async fn featured_programs(&self) -> Result<Vec<Program>, ApiError> {
        let query = Select::from(PROGRAMS)?
            .embed("category")?
            .eq("is_featured", true)?
            .eq("is_public", true)?
            .order("display_order", true)?
            .limit(3);
        decode(self.cached_rows(QueryKey::new(keys::FEATURED_PROGRAMS), query).await?)
    }

    /// Free-text program search. Terms shorter than [`MIN_SEARCH_CHARS`]
    /// characters return `None` without a request.
    pub async fn search_programs(&self, term: &str) -> Result<Option<Vec<ProgramSearchHit>>, ApiError> {
        if term.chars().count() < MIN_SEARCH_CHARS {
            return Ok(None);
        }
        let value = self
            .cached_rpc(
                QueryKey::with(keys::SEARCH_PROGRAMS, term),
                SEARCH_PROGRAMS,
                json!({ "search_term": term }),
            )
            .await?;
        let hits: Option<Vec<ProgramSearchHit>> = decode(value)?;
        Ok(Some(hits.unwrap_or_default()))
    }
}
