//! Visitor testimonials.
//!
//! Submissions go through [`TestimonialService::submit`]: rate limit, field
//! validation, duplicate-content check, then an append to the local store.
//! [`form::TestimonialForm`] wraps that flow in the form's UI states. The
//! fixed showcase testimonials live in [`seed`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/testimonials/featured` | No | Showcase testimonials |

pub mod dtos;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use dtos::{validate_testimonial, SubmitTestimonialDto};
pub use models::Testimonial;
pub use services::{content_hash, DuplicateGuard, TestimonialService, TestimonialStore};
