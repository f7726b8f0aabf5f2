mod testimonial_dto;

pub use testimonial_dto::{validate_testimonial, SubmitTestimonialDto};
