use axum::Json;

use crate::core::error::Result;
use crate::features::testimonials::models::Testimonial;
use crate::features::testimonials::seed::featured_testimonials;
use crate::shared::types::ApiResponse;

/// List the showcase testimonials
///
/// Public and read-only; visitor submissions stay in the visitor's own store.
#[utoipa::path(
    get,
    path = "/api/testimonials/featured",
    responses(
        (status = 200, description = "Showcase testimonials", body = ApiResponse<Vec<Testimonial>>)
    ),
    tag = "testimonials"
)]
pub async fn list_featured_testimonials() -> Result<Json<ApiResponse<Vec<Testimonial>>>> {
    Ok(Json(ApiResponse::success(Some(featured_testimonials()), None)))
}
