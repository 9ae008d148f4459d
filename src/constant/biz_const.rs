/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// provider variables layered on top of the yaml files
pub const API_KEY_VAR: &str = "RESEND_API_KEY";
pub const FROM_EMAIL_VAR: &str = "LEADS_FROM_EMAIL";
pub const TO_EMAIL_VAR: &str = "LEADS_TO_EMAIL";

/// intake routes
pub const CONTACT_PATH: &str = "/api/contact";
pub const LEAD_PATH: &str = "/api/lead";
pub const GENERIC_FAILURE: &str = "Failed";

/// email provider
pub const EMAILS_PATH: &str = "/emails";

/// lead form
pub const PHONE_DIGITS: usize = 10;
pub const REQUIRED: &str = "Required";
pub const BLANK_PLACEHOLDER: &str = "-";
pub const SUBJECT_PREFIX: &str = "New SeatAI lead";

/// lead client
pub const CLIENT_TIMEOUT_SECS: u64 = 15;
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
