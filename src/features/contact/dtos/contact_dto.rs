use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::sanitize::sanitize_input;
use crate::shared::validation::{
    collect_messages, validate_email_field, ValidationReport, PHONE_REGEX,
};

const FIELD_ORDER: [&str; 3] = ["name", "email", "phone"];

/// Contact form contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestDto {
    #[validate(length(min = 2, message = "Nome deve ter pelo menos 2 caracteres"))]
    pub name: String,

    #[validate(custom(function = "validate_email_field"))]
    pub email: String,

    /// Optional; checked only when filled in
    #[validate(regex(path = *PHONE_REGEX, message = "Telefone inválido"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub service: String,

    #[serde(default, alias = "date")]
    pub preferred_date: Option<String>,

    #[serde(default)]
    pub message: String,
}

fn sanitize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| sanitize_input(&v))
        .filter(|v| !v.is_empty())
}

impl ContactRequestDto {
    /// Sanitized copy; blank optional fields become `None`
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize_input(&self.name),
            email: sanitize_input(&self.email),
            phone: sanitize_optional(self.phone),
            service: sanitize_input(&self.service),
            preferred_date: sanitize_optional(self.preferred_date),
            message: sanitize_input(&self.message),
        }
    }

    pub fn report(&self) -> ValidationReport {
        match self.validate() {
            Ok(()) => ValidationReport::from_errors(Vec::new()),
            Err(errors) => ValidationReport::from_errors(collect_messages(&errors, &FIELD_ORDER)),
        }
    }

    /// Plain-text summary sent along in the WhatsApp message
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Olá! Meu nome é {}.", self.name),
            format!("Email: {}", self.email),
        ];
        if let Some(phone) = &self.phone {
            lines.push(format!("Telefone: {}", phone));
        }
        if !self.service.is_empty() {
            lines.push(format!("Serviço: {}", self.service));
        }
        if let Some(date) = &self.preferred_date {
            lines.push(format!("Data preferida: {}", date));
        }
        if !self.message.is_empty() {
            lines.push(format!("Mensagem: {}", self.message));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, phone: Option<&str>) -> ContactRequestDto {
        ContactRequestDto {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_without_phone() {
        let report = request("Ana", "ana@lavie.ao", None).report();
        assert!(report.valid);
    }

    #[test]
    fn test_phone_checked_only_when_present() {
        assert!(request("Ana", "ana@lavie.ao", Some("+244 930025350")).report().valid);

        let report = request("Ana", "ana@lavie.ao", Some("12-AB")).report();
        assert_eq!(report.errors, vec!["Telefone inválido"]);
    }

    #[test]
    fn test_reports_every_violation_in_order() {
        let report = request("A", "ana@", Some("123")).report();
        assert_eq!(
            report.errors,
            vec![
                "Nome deve ter pelo menos 2 caracteres",
                "Email inválido",
                "Telefone inválido",
            ]
        );
    }

    #[test]
    fn test_sanitized_drops_blank_optionals() {
        let dto = ContactRequestDto {
            name: " Ana ".to_string(),
            email: "ana@lavie.ao".to_string(),
            phone: Some("   ".to_string()),
            service: "Manicure com Gelinho".to_string(),
            preferred_date: Some(String::new()),
            message: "<b>Olá</b>".to_string(),
        }
        .sanitized();

        assert_eq!(dto.name, "Ana");
        assert_eq!(dto.phone, None);
        assert_eq!(dto.preferred_date, None);
        assert_eq!(dto.message, "&lt;b&gt;Olá&lt;/b&gt;");
        assert!(dto.report().valid);
    }

    #[test]
    fn test_summary_skips_empty_fields() {
        let mut dto = request("Ana", "ana@lavie.ao", None);
        dto.service = "Depilação com Cera".to_string();
        assert_eq!(
            dto.summary(),
            "Olá! Meu nome é Ana.\nEmail: ana@lavie.ao\nServiço: Depilação com Cera"
        );
    }

    #[test]
    fn test_accepts_date_field_name() {
        let dto: ContactRequestDto = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@lavie.ao","date":"2025-08-20"}"#,
        )
        .unwrap();
        assert_eq!(dto.preferred_date.as_deref(), Some("2025-08-20"));
        assert_eq!(dto.phone, None);
    }
}
