//! Serves the Nazma Trust page and data API.
//!
//! Run from repo root: `cargo run -p site_server`
//! Reads `SUPABASE_URL` / `SUPABASE_ANON_KEY` (or a `.env` file); set
//! `SITE_BACKEND=postgres` and `DATABASE_URL` to talk to PostgreSQL directly.

use nazma_trust_web::{app, AppState, Backend, BackendConfig, BackendKind, PgBackend, RestBackend, ServerConfig, SiteApi};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nazma_trust_web=info,site_server=info")),
        )
        .init();

    let server = ServerConfig::from_env()?;
    let backend: Arc<dyn Backend> = match server.backend {
        BackendKind::Rest => {
            let config = BackendConfig::from_env()?;
            tracing::info!(url = %config.url, schema = %config.schema, "using REST backend");
            Arc::new(RestBackend::new(&config)?)
        }
        BackendKind::Postgres => {
            let url = server.database_url.as_deref().unwrap_or_default();
            tracing::info!("using direct PostgreSQL backend");
            Arc::new(PgBackend::connect(url).await?)
        }
    };

    let state = AppState::new(SiteApi::new(backend, server.cache_ttl));
    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!("Nazma Trust site listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
