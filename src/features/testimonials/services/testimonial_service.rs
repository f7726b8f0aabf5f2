use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::rate_limits::{RateLimitPolicy, RateLimitService};
use crate::features::testimonials::dtos::SubmitTestimonialDto;
use crate::features::testimonials::models::Testimonial;
use crate::features::testimonials::services::{content_hash, DuplicateGuard, TestimonialStore};
use crate::modules::storage::KeyValueStore;
use crate::shared::clock::Clock;
use crate::shared::constants::{DUPLICATE_TESTIMONIAL_MESSAGE, RATE_LIMIT_MESSAGE};

/// Service for accepting visitor testimonials
pub struct TestimonialService {
    rate_limiter: Arc<RateLimitService>,
    duplicate_guard: DuplicateGuard,
    store: TestimonialStore,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
}

impl TestimonialService {
    pub fn new(
        rate_limiter: Arc<RateLimitService>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rate_limiter,
            duplicate_guard: DuplicateGuard::new(Arc::clone(&store)),
            store: TestimonialStore::new(store),
            clock,
            policy: RateLimitPolicy::testimonial(),
        }
    }

    pub fn with_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn store(&self) -> &TestimonialStore {
        &self.store
    }

    /// Accept a testimonial.
    ///
    /// Checks run in order and stop at the first failing stage: rate limit,
    /// field validation (all violations reported), duplicate text. Once
    /// accepted, failing to persist the record is logged but not surfaced.
    pub fn submit(&self, dto: SubmitTestimonialDto) -> Result<Testimonial> {
        if !self.rate_limiter.check(&self.policy) {
            return Err(AppError::RateLimitExceeded(RATE_LIMIT_MESSAGE.to_string()));
        }

        let dto = dto.sanitized();
        let report = dto.report();
        if !report.valid {
            tracing::debug!(errors = ?report.errors, "Testimonial rejected by validation");
            return Err(AppError::Validation(report.errors));
        }

        let hash = content_hash(&dto.message);
        if self.duplicate_guard.is_duplicate(&hash) {
            tracing::info!("Duplicate testimonial rejected: hash={}", hash);
            return Err(AppError::Conflict(DUPLICATE_TESTIMONIAL_MESSAGE.to_string()));
        }

        let testimonial = Testimonial::from_submission(dto, self.clock.now());

        // only a saved record blocks its text from coming back
        match self.store.append(testimonial.clone()) {
            Ok(()) => {
                if let Err(e) = self.duplicate_guard.remember(&hash) {
                    tracing::warn!(error = %e, "Could not record testimonial hash");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Could not save testimonial"),
        }

        tracing::info!(
            "Testimonial accepted: id={}, rating={}",
            testimonial.id,
            testimonial.rating
        );

        Ok(testimonial)
    }
}
