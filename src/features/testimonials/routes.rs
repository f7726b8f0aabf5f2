use axum::{routing::get, Router};

use crate::features::testimonials::handlers;

/// Create routes for the testimonials feature
///
/// Read-only: submissions are handled by the form flow, not over HTTP.
pub fn routes() -> Router {
    Router::new().route(
        "/api/testimonials/featured",
        get(handlers::list_featured_testimonials),
    )
}
