//! `wa.me` deep links used by the floating button, the service cards and the
//! contact form.

use crate::shared::constants::BOOKING_GREETING;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl WhatsAppLink {
    /// `number` is the international number, digits only
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Chat with `text` prefilled
    pub fn with_text(&self, text: &str) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            self.number,
            urlencoding::encode(text)
        )
    }

    pub fn booking(&self) -> String {
        self.with_text(BOOKING_GREETING)
    }

    /// Price and availability inquiry about one service
    pub fn service_inquiry(&self, service_name: &str) -> String {
        self.with_text(&format!(
            "Olá! Gostaria de saber mais sobre o serviço \"{}\". Poderia me informar o preço e disponibilidade para agendamento?",
            service_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_link() {
        let link = WhatsAppLink::new("244930025350").booking();
        assert!(link.starts_with("https://wa.me/244930025350?text=Ol%C3%A1%21%20Gostaria%20de%20agendar"));
        assert!(link.ends_with("Poderia%20me%20ajudar%3F"));
    }

    #[test]
    fn test_service_inquiry_quotes_service_name() {
        let link = WhatsAppLink::new("244930025350").service_inquiry("Depilação com Linha");
        assert!(link.contains("%22Depila%C3%A7%C3%A3o%20com%20Linha%22"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_text_is_fully_escaped() {
        let link = WhatsAppLink::new("1").with_text("a&b=c\nd");
        assert_eq!(link, "https://wa.me/1?text=a%26b%3Dc%0Ad");
    }
}
