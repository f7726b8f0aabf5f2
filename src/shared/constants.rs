/// Maximum number of characters kept by the input sanitizer
pub const MAX_INPUT_LENGTH: usize = 500;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Words that flag a testimonial as unwanted content (matched case-insensitively)
pub const BANNED_WORDS: &[&str] = &["spam", "fake", "bot", "test"];

// =============================================================================
// STORAGE KEYS
// =============================================================================

/// Prefix of the per-action rate-limit ledgers (`rate_limit_<action>`)
pub const RATE_LIMIT_KEY_PREFIX: &str = "rate_limit_";

/// Ledger of content hashes of accepted testimonials
pub const TESTIMONIAL_HASHES_KEY: &str = "testimonial_hashes";

/// Ledger of accepted user testimonials
pub const APPROVED_TESTIMONIALS_KEY: &str = "approved_testimonials";

/// Schema version written into every ledger envelope
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// ACTIONS & DEFAULTS
// =============================================================================

pub const CONTACT_ACTION: &str = "contact";
pub const TESTIMONIAL_ACTION: &str = "testimonial";

pub const DEFAULT_CONTACT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_TESTIMONIAL_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: i64 = 3600;

/// Rating preselected on an empty testimonial form
pub const DEFAULT_RATING: i32 = 5;

/// Role shown for testimonials written through the form
pub const SUBMITTED_ROLE: &str = "Cliente";

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

pub const RATE_LIMIT_MESSAGE: &str = "Muitas tentativas. Tente novamente em 1 hora.";
pub const DUPLICATE_TESTIMONIAL_MESSAGE: &str = "Este depoimento já foi enviado anteriormente.";
pub const MAINTENANCE_MESSAGE: &str = "Site em manutenção temporária";

// =============================================================================
// CONTACT
// =============================================================================

/// Prefilled text of the floating WhatsApp button
pub const BOOKING_GREETING: &str =
    "Olá! Gostaria de agendar um horário no La Vie Esbella Spa. Poderia me ajudar?";
