use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::shared::constants::{BANNED_WORDS, MAX_EMAIL_LENGTH};

lazy_static! {
    /// Regex for validating email fields
    /// Something without spaces or '@', an '@', then a dotted domain
    /// - Valid: "a@b.co", "ana.costa@lavie.ao"
    /// - Invalid: "not-an-email", "a@b", "a b@c.de", "a@@b.co"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Regex for validating phone fields
    /// 8 to 15 characters of digits, spaces, hyphens, plus and parentheses
    /// - Valid: "+244 930025350", "(11) 9999-9999", "930025350"
    /// - Invalid: "1234567", "930-ABC-350", "+244 930 025 350" (16 characters)
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9\s\-+()]{8,15}$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.chars().count() <= MAX_EMAIL_LENGTH
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// True when the text contains any banned word, ignoring case
pub fn contains_banned_word(text: &str) -> bool {
    let folded = text.to_lowercase();
    BANNED_WORDS.iter().any(|word| folded.contains(word))
}

/// Field validator for `#[validate(custom(...))]` on email fields
pub fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some(Cow::from("Email inválido"));
    Err(error)
}

/// Outcome of validating a form: a pass flag plus every violation found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Flatten `validator` errors into user-facing messages.
///
/// `ValidationErrors` is keyed by field in a hash map, so `field_order`
/// fixes the order messages are reported in. Struct-level checks live
/// under `"__all__"`.
pub fn collect_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    field_order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect()
}
