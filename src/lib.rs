//! Nazma Trust website: data access over the hosted backend, page view-models,
//! and the HTTP surface that serves them.

pub mod api;
pub mod backend;
pub mod cache;
pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod normalize;
pub mod query;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod views;

pub use api::SiteApi;
pub use backend::{Backend, PgBackend, RestBackend};
pub use config::{BackendConfig, BackendKind, ServerConfig};
pub use error::{ApiError, AppError, BackendError, ConfigError};
pub use routes::{app, common_routes, site_routes};
pub use state::AppState;
