use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;

use crate::core::config::{Config, SiteConfig};
use crate::core::middleware;
use crate::core::openapi::ApiDoc;
use crate::features::maintenance::routes as maintenance_routes;
use crate::features::testimonials::routes as testimonials_routes;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Built pages, with unknown paths answered by `index.html` so client-side
/// routes load.
fn static_files(site: &SiteConfig) -> ServeDir<ServeFile> {
    let index = site.static_dir.join("index.html");
    ServeDir::new(&site.static_dir).fallback(ServeFile::new(index))
}

/// Every route and site-wide layer except tracing and request ids, which
/// the binary adds around this.
pub fn build_app(config: &Config) -> Router {
    let site = Arc::new(config.site.clone());

    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(maintenance_routes::routes(Arc::clone(&site)))
        .merge(testimonials_routes::routes())
        .fallback_service(static_files(&site))
        .layer(from_fn_with_state(
            Arc::clone(&site),
            middleware::maintenance_mode,
        ))
        .layer(from_fn(middleware::security_headers))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
}
