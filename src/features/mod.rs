pub mod contact;
pub mod maintenance;
pub mod rate_limits;
pub mod testimonials;
