use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::shared::constants::DEFAULT_RATING;
use crate::shared::sanitize::sanitize_input;
use crate::shared::validation::{collect_messages, contains_banned_word, ValidationReport};

/// Order violations are reported in
const FIELD_ORDER: [&str; 4] = ["name", "message", "rating", "__all__"];

/// Testimonial form contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_allowed_content", skip_on_field_errors = false))]
pub struct SubmitTestimonialDto {
    #[validate(length(min = 2, max = 50, message = "Nome deve ter entre 2 e 50 caracteres"))]
    pub name: String,

    #[validate(length(
        min = 10,
        max = 500,
        message = "Mensagem deve ter entre 10 e 500 caracteres"
    ))]
    pub message: String,

    #[validate(range(min = 1, max = 5, message = "Avaliação deve ser entre 1 e 5 estrelas"))]
    #[serde(default = "default_rating")]
    pub rating: i32,

    /// Treatment picked from the list, may be left empty
    #[serde(default)]
    pub treatment: String,
}

fn default_rating() -> i32 {
    DEFAULT_RATING
}

impl Default for SubmitTestimonialDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            message: String::new(),
            rating: DEFAULT_RATING,
            treatment: String::new(),
        }
    }
}

fn validate_allowed_content(dto: &SubmitTestimonialDto) -> Result<(), ValidationError> {
    if contains_banned_word(&dto.message) {
        let mut error = ValidationError::new("banned_content");
        error.message = Some(Cow::from("Conteúdo não permitido detectado"));
        return Err(error);
    }
    Ok(())
}

impl SubmitTestimonialDto {
    /// Same submission with every free-text field passed through the sanitizer
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize_input(&self.name),
            message: sanitize_input(&self.message),
            rating: self.rating,
            treatment: sanitize_input(&self.treatment),
        }
    }

    /// Every violation at once, never just the first
    pub fn report(&self) -> ValidationReport {
        match self.validate() {
            Ok(()) => ValidationReport::from_errors(Vec::new()),
            Err(errors) => ValidationReport::from_errors(collect_messages(&errors, &FIELD_ORDER)),
        }
    }
}

/// Check a testimonial's name, message and rating
pub fn validate_testimonial(name: &str, message: &str, rating: i32) -> ValidationReport {
    SubmitTestimonialDto {
        name: name.to_string(),
        message: message.to_string(),
        rating,
        treatment: String::new(),
    }
    .report()
}
