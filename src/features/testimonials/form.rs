//! Testimonial form states.
//!
//! ```text
//! Editing --submit--> Submitting --> Accepted --(reset delay)--> Editing
//!                               \--> Rejected(errors) --(edit)--> Editing
//! ```
//!
//! The reset after acceptance is a deferred check made by [`TestimonialForm::tick`],
//! so the caller's event loop never blocks on it.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::features::testimonials::dtos::SubmitTestimonialDto;
use crate::features::testimonials::models::Testimonial;
use crate::features::testimonials::services::TestimonialService;
use crate::shared::clock::Clock;
use crate::shared::sanitize::sanitize_input;

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing,
    Submitting,
    Accepted {
        testimonial: Testimonial,
        accepted_at: DateTime<Utc>,
    },
    Rejected {
        errors: Vec<String>,
    },
}

/// Free-text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialField {
    Name,
    Message,
    Treatment,
}

pub struct TestimonialForm {
    service: Arc<TestimonialService>,
    clock: Arc<dyn Clock>,
    reset_delay: Duration,
    draft: SubmitTestimonialDto,
    state: FormState,
}

impl TestimonialForm {
    pub fn new(service: Arc<TestimonialService>, clock: Arc<dyn Clock>, reset_delay: Duration) -> Self {
        Self {
            service,
            clock,
            reset_delay,
            draft: SubmitTestimonialDto::default(),
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &SubmitTestimonialDto {
        &self.draft
    }

    fn locked(&self) -> bool {
        matches!(self.state, FormState::Submitting | FormState::Accepted { .. })
    }

    /// Store a sanitized field value; clears any shown errors
    pub fn update(&mut self, field: TestimonialField, value: &str) {
        if self.locked() {
            return;
        }
        let value = sanitize_input(value);
        match field {
            TestimonialField::Name => self.draft.name = value,
            TestimonialField::Message => self.draft.message = value,
            TestimonialField::Treatment => self.draft.treatment = value,
        }
        self.state = FormState::Editing;
    }

    pub fn set_rating(&mut self, rating: i32) {
        if self.locked() {
            return;
        }
        self.draft.rating = rating;
        self.state = FormState::Editing;
    }

    /// Run the submission flow on the current draft
    pub fn submit(&mut self) -> &FormState {
        if self.locked() {
            return &self.state;
        }

        self.state = FormState::Submitting;
        self.state = match self.service.submit(self.draft.clone()) {
            Ok(testimonial) => FormState::Accepted {
                testimonial,
                accepted_at: self.clock.now(),
            },
            Err(e) => FormState::Rejected {
                errors: e.messages(),
            },
        };
        &self.state
    }

    /// Return an accepted form to an empty draft once the confirmation has
    /// been shown long enough. Returns whether the form was reset.
    pub fn tick(&mut self) -> bool {
        let FormState::Accepted { accepted_at, .. } = &self.state else {
            return false;
        };
        if self.clock.now() - *accepted_at < self.reset_delay {
            return false;
        }

        self.draft = SubmitTestimonialDto::default();
        self.state = FormState::Editing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rate_limits::RateLimitService;
    use crate::shared::clock::ManualClock;
    use crate::shared::test_helpers::{manual_clock, memory_store};

    fn form(clock: Arc<ManualClock>) -> TestimonialForm {
        let store = memory_store();
        let limiter = Arc::new(RateLimitService::new(Arc::clone(&store), clock.clone()));
        let service = Arc::new(TestimonialService::new(limiter, store, clock.clone()));
        TestimonialForm::new(service, clock, Duration::milliseconds(3000))
    }

    fn fill(form: &mut TestimonialForm, name: &str, message: &str) {
        form.update(TestimonialField::Name, name);
        form.update(TestimonialField::Message, message);
    }

    #[test]
    fn test_edits_are_sanitized() {
        let mut form = form(manual_clock());
        form.update(TestimonialField::Name, "  <Ana>  ");
        form.update(TestimonialField::Treatment, "Outro");
        assert_eq!(form.draft().name, "&lt;Ana&gt;");
        assert_eq!(form.draft().treatment, "Outro");
        assert_eq!(form.draft().rating, 5);
    }

    #[test]
    fn test_accept_then_reset_after_delay() {
        let clock = manual_clock();
        let mut form = form(clock.clone());
        fill(&mut form, "Ana", "Ótimo atendimento, recomendo");
        form.set_rating(4);

        let FormState::Accepted { testimonial, .. } = form.submit().clone() else {
            panic!("expected the submission to be accepted");
        };
        assert_eq!(testimonial.rating, 4);

        // still showing the confirmation
        clock.advance(Duration::milliseconds(2999));
        assert!(!form.tick());
        assert!(matches!(form.state(), FormState::Accepted { .. }));

        clock.advance(Duration::milliseconds(1));
        assert!(form.tick());
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.draft(), &SubmitTestimonialDto::default());
    }

    #[test]
    fn test_accepted_form_ignores_input_until_reset() {
        let mut form = form(manual_clock());
        fill(&mut form, "Ana", "Ótimo atendimento, recomendo");
        form.submit();

        form.update(TestimonialField::Name, "Outra");
        form.set_rating(1);
        assert_eq!(form.draft().name, "Ana");
        assert_eq!(form.draft().rating, 5);

        // a second submit while accepted does not create another record
        assert!(matches!(form.submit(), FormState::Accepted { .. }));
    }

    #[test]
    fn test_rejection_lists_errors_and_edit_clears_them() {
        let mut form = form(manual_clock());
        fill(&mut form, "A", "Ótimo atendimento, recomendo");

        assert_eq!(
            form.submit(),
            &FormState::Rejected {
                errors: vec!["Nome deve ter entre 2 e 50 caracteres".to_string()]
            }
        );
        assert!(!form.tick());

        form.update(TestimonialField::Name, "Ana");
        assert_eq!(form.state(), &FormState::Editing);
        assert!(matches!(form.submit(), FormState::Accepted { .. }));
    }

    #[test]
    fn test_resubmitting_same_text_is_rejected_as_duplicate() {
        let clock = manual_clock();
        let mut form = form(clock.clone());
        fill(&mut form, "Ana", "Ótimo atendimento, recomendo");
        form.submit();
        clock.advance(Duration::seconds(3));
        assert!(form.tick());

        fill(&mut form, "Ana", "Ótimo atendimento, recomendo");
        assert_eq!(
            form.submit(),
            &FormState::Rejected {
                errors: vec!["Este depoimento já foi enviado anteriormente.".to_string()]
            }
        );
    }
}
