use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::config::SiteConfig;
use crate::features::maintenance::dtos::MaintenanceResponseDto;

/// 503 with `Retry-After` and the maintenance body
pub fn maintenance_response(retry_after_secs: u64) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        [(header::RETRY_AFTER, retry_after_secs.to_string())],
        Json(MaintenanceResponseDto::new(retry_after_secs)),
    )
        .into_response()
}

/// Maintenance notice
///
/// Always answers 503; hosting rewrites point here while the site is down.
#[utoipa::path(
    get,
    path = "/api/maintenance",
    responses(
        (status = 503, description = "Site under maintenance", body = MaintenanceResponseDto,
            headers(("Retry-After" = u64, description = "Seconds until the site is back")))
    ),
    tag = "maintenance"
)]
pub async fn get_maintenance(State(site): State<Arc<SiteConfig>>) -> Response {
    maintenance_response(site.maintenance_retry_after_secs)
}
