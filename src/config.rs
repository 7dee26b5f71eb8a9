//! Configuration types.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Phone number the inquiry deep links are scoped to.
pub const DEFAULT_CONTACT_PHONE: &str = "918960186655";

/// Base address of the chat-link service.
pub const CONTACT_SERVICE_BASE: &str = "https://wa.me/";

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6,15}$").unwrap());

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port the HTTP API listens on.
    pub port: u16,
    /// Contact phone number, digits only (no leading `+`).
    pub contact_phone: String,
    /// Optional JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            catalog_path: None,
        }
    }
}

impl ServiceConfig {
    /// Build configuration from `TREKDESK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("TREKDESK_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "TREKDESK_PORT".to_string(),
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let contact_phone = match std::env::var("TREKDESK_CONTACT_PHONE") {
            Ok(raw) => normalize_phone(&raw)?,
            Err(_) => DEFAULT_CONTACT_PHONE.to_string(),
        };

        let catalog_path = std::env::var("TREKDESK_CATALOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            port,
            contact_phone,
            catalog_path,
        })
    }
}

/// Strip an optional leading `+` and check the rest is a plausible phone number.
pub fn normalize_phone(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !PHONE_RE.is_match(digits) {
        return Err(ConfigError::InvalidValue {
            key: "TREKDESK_CONTACT_PHONE".to_string(),
            message: format!("expected 6-15 digits, got {raw:?}"),
        });
    }
    Ok(digits.to_string())
}
