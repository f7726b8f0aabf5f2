use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of an action's budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStatusDto {
    pub action: String,
    /// Attempts recorded inside the current window
    pub attempts_used: u32,
    /// Attempts left before the limit kicks in
    pub attempts_remaining: u32,
    pub max_attempts: u32,
    /// Whether the next attempt would be allowed
    pub allowed: bool,
    /// When the oldest recorded attempt leaves the window
    pub resets_at: Option<DateTime<Utc>>,
}
