use std::sync::Arc;

use crate::core::config::Config;
use crate::features::contact::{ContactService, WhatsAppLink};
use crate::features::rate_limits::RateLimitService;
use crate::features::testimonials::form::TestimonialForm;
use crate::features::testimonials::TestimonialService;
use crate::modules::storage::{InMemoryStore, KeyValueStore};
use crate::shared::clock::{Clock, SystemClock};

/// The form services wired from configuration over one store and clock
pub struct SiteServices {
    pub rate_limiter: Arc<RateLimitService>,
    pub contact: Arc<ContactService>,
    pub testimonials: Arc<TestimonialService>,
    pub whatsapp: WhatsAppLink,
    clock: Arc<dyn Clock>,
    reset_delay: chrono::Duration,
}

impl SiteServices {
    /// Process-local store and wall clock
    pub fn new(config: &Config) -> Self {
        Self::from_config(config, Arc::new(InMemoryStore::new()), Arc::new(SystemClock))
    }

    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let rate_limiter = Arc::new(
            RateLimitService::new(Arc::clone(&store), Arc::clone(&clock))
                .with_fail_open(config.rate_limits.fail_open),
        );
        let whatsapp = WhatsAppLink::new(config.site.whatsapp_number.clone());

        let contact = Arc::new(
            ContactService::new(Arc::clone(&rate_limiter), whatsapp.clone(), Arc::clone(&clock))
                .with_policy(config.rate_limits.contact_policy()),
        );
        let testimonials = Arc::new(
            TestimonialService::new(Arc::clone(&rate_limiter), store, Arc::clone(&clock))
                .with_policy(config.rate_limits.testimonial_policy()),
        );

        tracing::debug!(
            fail_open = config.rate_limits.fail_open,
            "Form services initialized"
        );

        Self {
            rate_limiter,
            contact,
            testimonials,
            whatsapp,
            clock,
            reset_delay: config.form.reset_delay(),
        }
    }

    /// A fresh, empty testimonial form
    pub fn testimonial_form(&self) -> TestimonialForm {
        TestimonialForm::new(
            Arc::clone(&self.testimonials),
            Arc::clone(&self.clock),
            self.reset_delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::ContactRequestDto;
    use crate::features::testimonials::form::{FormState, TestimonialField};
    use crate::shared::test_helpers::{manual_clock, memory_store, test_config};

    fn contact_request() -> ContactRequestDto {
        ContactRequestDto {
            name: "Ana".to_string(),
            email: "ana@lavie.ao".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_services_accept_contact() {
        let services = SiteServices::new(&test_config());
        assert!(services.contact.submit(contact_request()).is_ok());
        assert_eq!(services.whatsapp.number(), "244930025350");
    }

    #[test]
    fn test_policies_come_from_config() {
        let mut config = test_config();
        config.rate_limits.contact_max_attempts = 1;
        let services = SiteServices::from_config(&config, memory_store(), manual_clock());

        assert!(services.contact.submit(contact_request()).is_ok());
        assert!(services.contact.submit(contact_request()).is_err());
    }

    #[test]
    fn test_whatsapp_number_from_config() {
        let mut config = test_config();
        config.site.whatsapp_number = "5511999999999".to_string();
        let services = SiteServices::from_config(&config, memory_store(), manual_clock());

        let receipt = services.contact.submit(contact_request()).unwrap();
        assert!(receipt.whatsapp_url.starts_with("https://wa.me/5511999999999?text="));
    }

    #[test]
    fn test_fail_closed_blocks_on_outage() {
        let mut config = test_config();
        config.rate_limits.fail_open = false;
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::unavailable());
        let services = SiteServices::from_config(&config, store, manual_clock());

        assert!(!services.rate_limiter.fail_open());
        assert!(services.contact.submit(contact_request()).is_err());
    }

    #[test]
    fn test_form_uses_configured_reset_delay() {
        let clock = manual_clock();
        let mut config = test_config();
        config.form.reset_delay_ms = 500;
        let services = SiteServices::from_config(&config, memory_store(), clock.clone());

        let mut form = services.testimonial_form();
        form.update(TestimonialField::Name, "Ana");
        form.update(TestimonialField::Message, "Ótimo atendimento, recomendo");
        assert!(matches!(form.submit(), FormState::Accepted { .. }));

        clock.advance(chrono::Duration::milliseconds(500));
        assert!(form.tick());
    }
}
