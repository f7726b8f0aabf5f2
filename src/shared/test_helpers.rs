#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use chrono::{DateTime, TimeZone, Utc};

#[cfg(test)]
use crate::core::config::{AppConfig, Config, FormConfig, RateLimitSettings, SiteConfig};
#[cfg(test)]
use crate::modules::storage::{InMemoryStore, KeyValueStore};
#[cfg(test)]
use crate::shared::clock::ManualClock;

#[cfg(test)]
#[allow(dead_code)]
pub fn fixed_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 13, 9, 0, 0).unwrap()
}

#[cfg(test)]
#[allow(dead_code)]
pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(fixed_start()))
}

#[cfg(test)]
#[allow(dead_code)]
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(InMemoryStore::new())
}

#[cfg(test)]
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
        },
        site: SiteConfig {
            static_dir: "does-not-exist".into(),
            maintenance_mode: false,
            maintenance_retry_after_secs: SiteConfig::DEFAULT_MAINTENANCE_RETRY_AFTER_SECS,
            whatsapp_number: SiteConfig::DEFAULT_WHATSAPP_NUMBER.to_string(),
        },
        rate_limits: RateLimitSettings::default(),
        form: FormConfig::default(),
    }
}
