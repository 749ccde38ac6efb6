//! Site routes under `/api/v1`.

use crate::handlers::{content, forms, page};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Largest accepted form body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn site_routes(state: AppState) -> Router {
    let reads = Router::new()
        .route("/page", get(page::page))
        .route("/program-categories", get(content::program_categories))
        .route("/programs", get(content::programs))
        .route("/programs/featured", get(content::featured_programs))
        .route("/programs/:slug", get(content::program))
        .route("/trustees", get(content::trustees))
        .route("/financial-reports", get(content::financial_reports))
        .route("/financial-reports/latest", get(content::latest_financial_report))
        .route("/testimonials", get(content::testimonials))
        .route("/blog-posts", get(content::blog_posts))
        .route("/blog-posts/:slug", get(content::blog_post))
        .route("/settings", get(content::site_settings))
        .route("/stats/donations", get(content::donation_stats))
        .route("/stats/program-impact", get(content::program_impact))
        .route("/search/programs", get(content::search_programs));

    let writes = Router::new()
        .route("/preferences/theme/toggle", post(page::toggle_theme))
        .route("/contact", post(forms::submit_contact))
        .route("/volunteers", post(forms::submit_volunteer))
        .route("/newsletter", post(forms::subscribe))
        .route("/newsletter/unsubscribe", post(forms::unsubscribe))
        .route("/donations", post(forms::create_donation))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    Router::new()
        .nest("/api/v1", reads.merge(writes))
        .with_state(state)
}
