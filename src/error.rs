//! Error types for trekdesk.

use uuid::Uuid;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Inquiry error: {0}")]
    Inquiry(#[from] InquiryError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Catalog loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Destination with empty name in category {category}")]
    EmptyName { category: String },

    #[error("Duplicate destination {name} in category {category}")]
    DuplicateName { category: String, name: String },

    #[error("Itinerary for {destination} is not strictly increasing: day {previous} followed by day {next}")]
    DaysNotIncreasing {
        destination: String,
        previous: i32,
        next: i32,
    },

    #[error("Itinerary for {destination} has no activities on day {day}")]
    EmptyActivities { destination: String, day: i32 },
}

/// Inquiry composition errors.
#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    /// The inquiry is missing a destination and/or a date. Callers are
    /// expected to gate submission on `InquiryState::can_submit`.
    #[error("Inquiry is incomplete, missing: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("Invalid share query: {0}")]
    InvalidShareQuery(String),
}

/// Session lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{kind} session {id} not found")]
    NotFound { kind: &'static str, id: Uuid },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_missing_fields() {
        let err = InquiryError::Incomplete {
            missing: vec!["destination", "date"],
        };
        assert_eq!(
            err.to_string(),
            "Inquiry is incomplete, missing: destination, date"
        );
    }

    #[test]
    fn nested_errors_convert_into_top_level() {
        let err: Error = CatalogError::EmptyName {
            category: "trek".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Catalog(_)));
        assert_eq!(
            err.to_string(),
            "Catalog error: Destination with empty name in category trek"
        );

        let err: Error = SessionError::NotFound {
            kind: "walk",
            id: Uuid::nil(),
        }
        .into();
        assert!(err.to_string().starts_with("Session error: walk session 00000000"));
    }
}
