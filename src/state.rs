//! Shared application state for all routes.

use crate::api::SiteApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<SiteApi>,
}

impl AppState {
    pub fn new(api: SiteApi) -> Self {
        AppState { api: Arc::new(api) }
    }
}
