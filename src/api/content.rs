use super::{decode, keys, SiteApi};
use crate::backend::Backend;
use crate::cache::QueryKey;
use crate::config::{BLOG_POSTS, INCREMENT_BLOG_VIEW_COUNT, SITE_SETTINGS, TESTIMONIALS, TRUSTEES};
use crate::error::ApiError;
use crate::model::{BlogPost, SiteSetting, Testimonial, Trustee};
use crate::query::Select;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use std::collections::BTreeMap;

impl SiteApi {
    /// Public, active trustees in display order.
    pub async fn trustees(&self) -> Result<Vec<Trustee>, ApiError> {
        let query = Select::from(TRUSTEES)?
            .eq("is_public", true)?
            .eq("is_active", true)?
            .order("display_order", true)?;
        decode(self.cached_rows(QueryKey::new(keys::TRUSTEES), query).await?)
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let query = Select::from(TESTIMONIALS)?
            .embed("program")?
            .embed("category")?
            .eq("is_approved", true)?
            .eq("is_public", true)?
            .order("display_order", true)?;
        decode(self.cached_rows(QueryKey::new(keys::TESTIMONIALS), query).await?)
    }

    /// Published posts whose publish date has passed, newest first.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let query = Select::from(BLOG_POSTS)?
            .embed("author")?
            .embed("category")?
            .eq("is_published", true)?
            .lte("published_date", now)?
            .order("published_date", false)?;
        decode(self.cached_rows(QueryKey::new(keys::BLOG_POSTS), query).await?)
    }

    /// Published post by slug. Every call counts one view, whether the row
    /// came from the backend or the cache; a failed increment is logged and
    /// does not affect the returned post. Reads and increments are not
    /// atomic, so concurrent calls may each count.
    pub async fn blog_post(&self, slug: &str) -> Result<Option<BlogPost>, ApiError> {
        if slug.is_empty() {
            return Ok(None);
        }
        let query = Select::from(BLOG_POSTS)?
            .embed("author")?
            .embed("category")?
            .eq("slug", slug)?
            .eq("is_published", true)?;
        let row = self.cached_single(QueryKey::with(keys::BLOG_POST, slug), query).await?;
        let post: BlogPost = decode(row)?;
        count_view(self.backend.as_ref(), &post).await;
        Ok(Some(post))
    }

    /// Public settings as key → value; a missing value reads as "".
    pub async fn site_settings(&self) -> Result<BTreeMap<String, String>, ApiError> {
        let query = Select::from(SITE_SETTINGS)?.eq("is_public", true)?;
        let rows: Vec<SiteSetting> = decode(self.cached_rows(QueryKey::new(keys::SITE_SETTINGS), query).await?)?;
        Ok(rows
            .into_iter()
            .map(|s| (s.setting_key, s.setting_value.unwrap_or_default()))
            .collect())
    }
}

async fn count_view(backend: &dyn Backend, post: &BlogPost) {
    if let Err(e) = backend
        .rpc(INCREMENT_BLOG_VIEW_COUNT, json!({ "post_id": post.id }))
        .await
    {
        tracing::warn!(post_id = %post.id, error = %e, "view count increment failed");
    }
}
