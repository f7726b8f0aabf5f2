use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::ContactRequestDto;
use crate::features::contact::whatsapp::WhatsAppLink;
use crate::features::rate_limits::{RateLimitPolicy, RateLimitService};
use crate::shared::clock::Clock;
use crate::shared::constants::RATE_LIMIT_MESSAGE;

/// An accepted contact request and the chat link that continues it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub request: ContactRequestDto,
    pub whatsapp_url: String,
    pub received_at: DateTime<Utc>,
}

pub struct ContactService {
    rate_limiter: Arc<RateLimitService>,
    whatsapp: WhatsAppLink,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
}

impl ContactService {
    pub fn new(
        rate_limiter: Arc<RateLimitService>,
        whatsapp: WhatsAppLink,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rate_limiter,
            whatsapp,
            clock,
            policy: RateLimitPolicy::contact(),
        }
    }

    pub fn with_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Accept a contact request: rate limit first, then every field check.
    pub fn submit(&self, dto: ContactRequestDto) -> Result<ContactReceipt> {
        if !self.rate_limiter.check(&self.policy) {
            return Err(AppError::RateLimitExceeded(RATE_LIMIT_MESSAGE.to_string()));
        }

        let request = dto.sanitized();
        let report = request.report();
        if !report.valid {
            return Err(AppError::Validation(report.errors));
        }

        let whatsapp_url = self.whatsapp.with_text(&request.summary());
        tracing::info!(service = %request.service, "Contact request accepted");

        Ok(ContactReceipt {
            request,
            whatsapp_url,
            received_at: self.clock.now(),
        })
    }
}
