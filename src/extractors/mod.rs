//! Request extractors.

pub mod theme;

pub use theme::CookiePreferences;
