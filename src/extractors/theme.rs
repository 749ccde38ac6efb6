//! Theme preference carried in the `theme` cookie.

use crate::views::{PreferenceStore, THEME_KEY};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

/// Client hint some browsers send with the visitor's color scheme.
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "Sec-CH-Prefers-Color-Scheme";

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Preferences read from the request cookie; values set during the request
/// are written back with [`CookiePreferences::set_cookie`].
#[derive(Clone, Debug, Default)]
pub struct CookiePreferences {
    pub theme: Option<String>,
    pub prefers_dark: bool,
    changed: bool,
}

impl CookiePreferences {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let theme = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_KEY)
            .map(|(_, value)| value.trim().to_string())
            .filter(|s| !s.is_empty());
        let prefers_dark = headers
            .get(PREFERS_COLOR_SCHEME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
            .unwrap_or(false);
        CookiePreferences {
            theme,
            prefers_dark,
            changed: false,
        }
    }

    /// `Set-Cookie` value when the theme changed during the request.
    pub fn set_cookie(&self) -> Option<String> {
        if !self.changed {
            return None;
        }
        self.theme.as_ref().map(|theme| {
            format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                THEME_KEY, theme, COOKIE_MAX_AGE_SECS
            )
        })
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        (key == THEME_KEY).then(|| self.theme.clone()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if key == THEME_KEY {
            self.theme = Some(value.to_string());
            self.changed = true;
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CookiePreferences
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CookiePreferences::from_headers(&parts.headers))
    }
}
