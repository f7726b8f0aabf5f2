use std::env;
use std::path::PathBuf;

use chrono::Duration;

use crate::features::rate_limits::models::RateLimitPolicy;
use crate::shared::constants::{
    CONTACT_ACTION, DEFAULT_CONTACT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_WINDOW_SECS,
    DEFAULT_TESTIMONIAL_MAX_ATTEMPTS, TESTIMONIAL_ACTION,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub site: SiteConfig,
    pub rate_limits: RateLimitSettings,
    pub form: FormConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Static site hosting and maintenance switch
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the built pages (`index.html` is the fallback)
    pub static_dir: PathBuf,
    /// When set, every route but `/health` answers 503
    pub maintenance_mode: bool,
    pub maintenance_retry_after_secs: u64,
    /// Digits only, as used in `https://wa.me/<number>`
    pub whatsapp_number: String,
}

/// Attempt budgets for the two forms
#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub contact_max_attempts: u32,
    pub contact_window_secs: i64,
    pub testimonial_max_attempts: u32,
    pub testimonial_window_secs: i64,
    /// Allow the action when the ledger cannot be read or written
    pub fail_open: bool,
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    /// How long an accepted form shows its confirmation before resetting
    pub reset_delay_ms: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            site: SiteConfig::from_env()?,
            rate_limits: RateLimitSettings::from_env()?,
            form: FormConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SiteConfig {
    pub const DEFAULT_STATIC_DIR: &'static str = "dist";
    pub const DEFAULT_MAINTENANCE_RETRY_AFTER_SECS: u64 = 3600; // 1 hour
    pub const DEFAULT_WHATSAPP_NUMBER: &'static str = "244930025350";

    pub fn from_env() -> Result<Self, String> {
        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| Self::DEFAULT_STATIC_DIR.to_string())
            .into();

        let maintenance_mode = parse_bool("MAINTENANCE_MODE", false)?;

        let maintenance_retry_after_secs = env::var("MAINTENANCE_RETRY_AFTER_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAINTENANCE_RETRY_AFTER_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "MAINTENANCE_RETRY_AFTER_SECS must be a valid number".to_string())?;

        let whatsapp_number: String = env::var("WHATSAPP_NUMBER")
            .unwrap_or_else(|_| Self::DEFAULT_WHATSAPP_NUMBER.to_string())
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if whatsapp_number.is_empty() {
            return Err("WHATSAPP_NUMBER must contain digits".to_string());
        }

        Ok(Self {
            static_dir,
            maintenance_mode,
            maintenance_retry_after_secs,
            whatsapp_number,
        })
    }
}

impl RateLimitSettings {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let contact_max_attempts = parse_number(
            "CONTACT_RATE_LIMIT_MAX",
            defaults.contact_max_attempts,
        )?;
        let contact_window_secs = parse_number(
            "CONTACT_RATE_LIMIT_WINDOW_SECS",
            defaults.contact_window_secs,
        )?;
        let testimonial_max_attempts = parse_number(
            "TESTIMONIAL_RATE_LIMIT_MAX",
            defaults.testimonial_max_attempts,
        )?;
        let testimonial_window_secs = parse_number(
            "TESTIMONIAL_RATE_LIMIT_WINDOW_SECS",
            defaults.testimonial_window_secs,
        )?;
        let fail_open = parse_bool("RATE_LIMIT_FAIL_OPEN", defaults.fail_open)?;

        Ok(Self {
            contact_max_attempts,
            contact_window_secs,
            testimonial_max_attempts,
            testimonial_window_secs,
            fail_open,
        })
    }

    pub fn contact_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(
            CONTACT_ACTION,
            self.contact_max_attempts,
            Duration::seconds(self.contact_window_secs),
        )
    }

    pub fn testimonial_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(
            TESTIMONIAL_ACTION,
            self.testimonial_max_attempts,
            Duration::seconds(self.testimonial_window_secs),
        )
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            contact_max_attempts: DEFAULT_CONTACT_MAX_ATTEMPTS,
            contact_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            testimonial_max_attempts: DEFAULT_TESTIMONIAL_MAX_ATTEMPTS,
            testimonial_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            fail_open: true,
        }
    }
}

impl FormConfig {
    const DEFAULT_RESET_DELAY_MS: i64 = 3000;

    pub fn from_env() -> Result<Self, String> {
        let reset_delay_ms = parse_number("FORM_RESET_DELAY_MS", Self::DEFAULT_RESET_DELAY_MS)?;
        Ok(Self { reset_delay_ms })
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::milliseconds(self.reset_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: Self::DEFAULT_RESET_DELAY_MS,
        }
    }
}

fn parse_number<T>(name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", name))
}

fn parse_bool(name: &str, default: bool) -> Result<bool, String> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(format!("{} must be true or false", name)),
        },
    }
}
