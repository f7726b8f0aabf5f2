use utoipa::OpenApi;

use crate::features::maintenance::{dtos as maintenance_dtos, handlers as maintenance_handlers};
use crate::features::testimonials::{handlers as testimonials_handlers, models as testimonials_models};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Maintenance
        maintenance_handlers::get_maintenance,
        // Testimonials (public, read-only)
        testimonials_handlers::list_featured_testimonials,
    ),
    components(
        schemas(
            // Maintenance
            maintenance_dtos::MaintenanceResponseDto,
            // Testimonials
            testimonials_models::Testimonial,
            ApiResponse<Vec<testimonials_models::Testimonial>>,
        )
    ),
    tags(
        (name = "maintenance", description = "Maintenance notice"),
        (name = "testimonials", description = "Showcase testimonials (public)"),
    ),
    info(
        title = "La Vie Esbella Spa",
        version = "0.1.0",
        description = "Site server for the La Vie Esbella Spa landing page",
    )
)]
pub struct ApiDoc;
