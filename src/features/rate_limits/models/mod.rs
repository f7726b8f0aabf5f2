mod rate_limit_policy;

pub use rate_limit_policy::{rate_limit_key, RateLimitPolicy};
