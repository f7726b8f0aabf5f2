//! Sliding-window rate limiting for the site's forms.
//!
//! Each action ("contact", "testimonial") owns a ledger of attempt
//! timestamps under `rate_limit_<action>`. Every check prunes the ledger to
//! the window relative to now, so limits lift gradually as old attempts age
//! out instead of resetting on a timer.

pub mod dtos;
pub mod models;
pub mod services;

pub use models::RateLimitPolicy;
pub use services::RateLimitService;
