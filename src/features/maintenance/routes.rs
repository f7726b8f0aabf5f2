use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::config::SiteConfig;
use crate::features::maintenance::handlers;

pub fn routes(site: Arc<SiteConfig>) -> Router {
    Router::new()
        .route("/api/maintenance", get(handlers::get_maintenance))
        .with_state(site)
}
