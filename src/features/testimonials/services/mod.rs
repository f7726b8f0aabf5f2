mod duplicate_guard;
mod testimonial_service;
mod testimonial_store;

pub use duplicate_guard::{content_hash, DuplicateGuard};
pub use testimonial_service::TestimonialService;
pub use testimonial_store::TestimonialStore;
