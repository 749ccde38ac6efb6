//! The composed page and the theme toggle.

use crate::error::AppError;
use crate::extractors::CookiePreferences;
use crate::response::success_one;
use crate::state::AppState;
use crate::views::{NavbarState, Page};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::Response,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Current scroll offset, for the navbar style.
    #[serde(default, alias = "scrollY")]
    pub scroll_y: Option<f64>,
}

pub async fn page(
    State(state): State<AppState>,
    prefs: CookiePreferences,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let mut navbar = NavbarState::load(&prefs, prefs.prefers_dark);
    if let Some(y) = query.scroll_y {
        navbar.on_scroll(y);
    }
    let page = Page::load(&state.api, navbar, Utc::now().year()).await;
    success_one(page)
}

#[derive(Serialize)]
struct ThemeBody {
    theme: &'static str,
}

/// Flip the stored theme; the new value is returned and set as a cookie.
pub async fn toggle_theme(mut prefs: CookiePreferences) -> Result<Response, AppError> {
    let mut navbar = NavbarState::load(&prefs, prefs.prefers_dark);
    let theme = navbar.toggle_theme(&mut prefs);
    let mut response = success_one(ThemeBody { theme: theme.as_str() })?;
    if let Some(cookie) = prefs.set_cookie() {
        let value = HeaderValue::from_str(&cookie).map_err(|e| AppError::BadRequest(e.to_string()))?;
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    Ok(response)
}
