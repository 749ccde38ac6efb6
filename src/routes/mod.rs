//! Route tables.

pub mod common;
pub mod site;

pub use common::common_routes;
pub use site::site_routes;

use crate::state::AppState;
use axum::Router;

/// Every route the server exposes.
pub fn app(state: AppState) -> Router {
    common_routes(state.clone()).merge(site_routes(state))
}
