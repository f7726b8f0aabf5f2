use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::features::rate_limits::dtos::RateLimitStatusDto;
use crate::features::rate_limits::models::{rate_limit_key, RateLimitPolicy};
use crate::modules::storage::{read_ledger, write_ledger, KeyValueStore, StorageError};
use crate::shared::clock::Clock;

/// Service for checking and recording form attempts
pub struct RateLimitService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    fail_open: bool,
}

impl RateLimitService {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            fail_open: true,
        }
    }

    /// Whether a storage outage lets attempts through (`true`, the default)
    /// or blocks them.
    pub fn with_fail_open(mut self, fail_open: bool) -> Self {
        self.fail_open = fail_open;
        self
    }

    pub fn fail_open(&self) -> bool {
        self.fail_open
    }

    /// Check and record an attempt for `action`.
    ///
    /// Attempts older than `window` are dropped first. When `max_attempts`
    /// remain the attempt is rejected and nothing is recorded; otherwise now
    /// is appended and the ledger persisted.
    pub fn allow(&self, action: &str, max_attempts: u32, window: Duration) -> bool {
        let key = rate_limit_key(action);
        let now = self.clock.now().timestamp_millis();

        let mut attempts = match self.load_attempts(&key) {
            Ok(attempts) => attempts,
            Err(e) if e.is_outage() && !self.fail_open => {
                tracing::warn!(action, error = %e, "Rate limit ledger unreadable, blocking attempt");
                return false;
            }
            Err(e) => {
                tracing::warn!(action, error = %e, "Rate limit ledger unreadable, starting empty");
                Vec::new()
            }
        };

        prune(&mut attempts, now, window);

        if attempts.len() >= max_attempts as usize {
            tracing::info!(
                action,
                attempts = attempts.len(),
                max_attempts,
                "Rate limit exceeded"
            );
            return false;
        }

        attempts.push(now);
        if let Err(e) = write_ledger(self.store.as_ref(), &key, &attempts) {
            if !self.fail_open {
                tracing::warn!(action, error = %e, "Could not record attempt, blocking");
                return false;
            }
            tracing::warn!(action, error = %e, "Could not record attempt, allowing anyway");
        }

        true
    }

    /// [`allow`](Self::allow) with the budget of `policy`
    pub fn check(&self, policy: &RateLimitPolicy) -> bool {
        self.allow(&policy.action, policy.max_attempts, policy.window)
    }

    /// Current budget of `policy` without recording anything
    pub fn status(&self, policy: &RateLimitPolicy) -> RateLimitStatusDto {
        let now = self.clock.now().timestamp_millis();
        let mut blocked = false;
        let mut attempts = self
            .load_attempts(&policy.storage_key())
            .unwrap_or_else(|e| {
                tracing::warn!(action = %policy.action, error = %e, "Rate limit ledger unreadable");
                blocked = e.is_outage() && !self.fail_open;
                Vec::new()
            });
        prune(&mut attempts, now, policy.window);

        let attempts_used = u32::try_from(attempts.len()).unwrap_or(u32::MAX);
        let resets_at = attempts
            .iter()
            .min()
            .and_then(|oldest| oldest.checked_add(policy.window.num_milliseconds()))
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        // a fail-closed limiter on an unreachable store has no budget left
        let attempts_remaining = if blocked {
            0
        } else {
            policy.max_attempts.saturating_sub(attempts_used)
        };

        RateLimitStatusDto {
            action: policy.action.clone(),
            attempts_used,
            attempts_remaining,
            max_attempts: policy.max_attempts,
            allowed: !blocked && attempts_used < policy.max_attempts,
            resets_at,
        }
    }

    fn load_attempts(&self, key: &str) -> Result<Vec<i64>, StorageError> {
        read_ledger(self.store.as_ref(), key)
    }
}

/// Keep only attempts made less than `window` before `now`
fn prune(attempts: &mut Vec<i64>, now: i64, window: Duration) {
    let window_ms = window.num_milliseconds();
    attempts.retain(|&at| now.saturating_sub(at) < window_ms);
}
