use chrono::Duration;

use crate::shared::constants::{
    CONTACT_ACTION, DEFAULT_CONTACT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_WINDOW_SECS,
    DEFAULT_TESTIMONIAL_MAX_ATTEMPTS, RATE_LIMIT_KEY_PREFIX, TESTIMONIAL_ACTION,
};

/// Attempt budget for one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub action: String,
    pub max_attempts: u32,
    pub window: Duration,
}

impl RateLimitPolicy {
    pub fn new(action: impl Into<String>, max_attempts: u32, window: Duration) -> Self {
        Self {
            action: action.into(),
            max_attempts,
            window,
        }
    }

    /// 5 attempts per hour
    pub fn contact() -> Self {
        Self::new(
            CONTACT_ACTION,
            DEFAULT_CONTACT_MAX_ATTEMPTS,
            Duration::seconds(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        )
    }

    /// 3 attempts per hour
    pub fn testimonial() -> Self {
        Self::new(
            TESTIMONIAL_ACTION,
            DEFAULT_TESTIMONIAL_MAX_ATTEMPTS,
            Duration::seconds(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        )
    }

    pub fn storage_key(&self) -> String {
        rate_limit_key(&self.action)
    }
}

/// Storage key of the attempt ledger for `action`
pub fn rate_limit_key(action: &str) -> String {
    format!("{}{}", RATE_LIMIT_KEY_PREFIX, action)
}
