//! Maintenance notice.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/maintenance` | No | 503 with `Retry-After` |
//!
//! With `MAINTENANCE_MODE` on, [`crate::core::middleware::maintenance_mode`]
//! answers every other route with the same response.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use handlers::maintenance_response;
