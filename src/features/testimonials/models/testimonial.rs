use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::testimonials::dtos::SubmitTestimonialDto;
use crate::shared::constants::{DEFAULT_RATING, SUBMITTED_ROLE};

/// A published testimonial, either from the showcase set or a visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub message: String,
    pub rating: u8,
    #[serde(default)]
    pub treatment: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(alias = "date")]
    pub submitted_at: DateTime<Utc>,
    /// Always true: there is no moderation step
    #[serde(default = "default_true")]
    pub approved: bool,
    /// Visitor submissions can be removed, showcase entries cannot
    #[serde(default = "default_true", alias = "canDelete")]
    pub deletable: bool,
}

fn default_role() -> String {
    SUBMITTED_ROLE.to_string()
}

fn default_true() -> bool {
    true
}

impl Testimonial {
    /// Build the record for an accepted submission
    pub fn from_submission(dto: SubmitTestimonialDto, submitted_at: DateTime<Utc>) -> Self {
        let fallback = DEFAULT_RATING as u8;
        Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            message: dto.message,
            rating: u8::try_from(dto.rating).unwrap_or(fallback),
            treatment: dto.treatment,
            role: SUBMITTED_ROLE.to_string(),
            submitted_at,
            approved: true,
            deletable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::fixed_start;

    #[test]
    fn test_from_submission_marks_record_published_and_deletable() {
        let dto = SubmitTestimonialDto {
            name: "Ana".to_string(),
            message: "Ótimo atendimento, recomendo".to_string(),
            rating: 5,
            treatment: "Manicure com Gelinho".to_string(),
        };
        let t = Testimonial::from_submission(dto, fixed_start());

        assert!(Uuid::parse_str(&t.id).is_ok());
        assert_eq!(t.rating, 5);
        assert_eq!(t.role, "Cliente");
        assert_eq!(t.submitted_at, fixed_start());
        assert!(t.approved);
        assert!(t.deletable);
    }

    #[test]
    fn test_reads_records_written_by_the_old_site() {
        let raw = r#"{
            "name": "Ana",
            "message": "Ótimo atendimento, recomendo",
            "rating": 5,
            "treatment": "",
            "id": "3f1c0a52-8c1e-4c1b-9a51-2a4f0f8e7d10",
            "date": "2025-08-13T09:00:00.000Z",
            "approved": true,
            "role": "Cliente",
            "canDelete": true
        }"#;
        let t: Testimonial = serde_json::from_str(raw).unwrap();
        assert_eq!(t.submitted_at, fixed_start());
        assert!(t.deletable);
    }

    #[test]
    fn test_serializes_camel_case() {
        let dto = SubmitTestimonialDto {
            name: "Ana".to_string(),
            message: "Ótimo atendimento, recomendo".to_string(),
            rating: 4,
            treatment: String::new(),
        };
        let value = serde_json::to_value(Testimonial::from_submission(dto, fixed_start())).unwrap();
        assert!(value.get("submittedAt").is_some());
        assert_eq!(value["deletable"], true);
    }
}
