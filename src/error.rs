//! Unified minting error types.

use std::fmt;

use thiserror::Error;

/// Result of a single mint attempt: the parsed response body on success.
pub type MintResult = Result<serde_json::Value, MintError>;

/// Top-level minting error.
#[derive(Error, Debug)]
pub enum MintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// The service answered 200 but the body was empty or not JSON.
    #[error("Parse error: {message}")]
    Parse { message: String, raw_body: String },
}

/// Process configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not found in environment variables")]
    MissingApiKey,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Input validation errors. Raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field(s): {}", join(.0))]
    MissingFields(Vec<Field>),

    #[error("unreachable URL(s): {}", join(.0))]
    UnreachableUrls(Vec<UnreachableUrl>),
}

/// Transport-level failures: the request never produced an HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Connection(String),
}

/// Non-200 answers from the minting service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("service temporarily unavailable (HTTP 502)")]
    Unavailable,

    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },
}

/// A user-supplied field of a mint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CharacterName,
    ImageUrl,
    VoiceSampleUrl,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CharacterName => "character name",
            Field::ImageUrl => "image URL",
            Field::VoiceSampleUrl => "voice sample URL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL that failed the HEAD reachability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableUrl {
    pub field: Field,
    pub url: String,
    pub reason: String,
}

impl fmt::Display for UnreachableUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.field, self.url, self.reason)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl MintError {
    /// Build a parse error, keeping the raw body for diagnosis.
    pub fn parse(message: impl Into<String>, raw_body: impl Into<String>) -> Self {
        MintError::Parse {
            message: message.into(),
            raw_body: raw_body.into(),
        }
    }

    /// Stable machine-readable kind, used in proxy error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            MintError::Config(_) => "configuration",
            MintError::Validation(_) => "validation",
            MintError::Transport(TransportError::Timeout) => "timeout",
            MintError::Transport(TransportError::Connection(_)) => "connection",
            MintError::Service(ServiceError::Unavailable) => "service_unavailable",
            MintError::Service(ServiceError::Status { .. }) => "service",
            MintError::Parse { .. } => "parse",
        }
    }

    /// Whether re-submitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MintError::Transport(TransportError::Timeout)
                | MintError::Service(ServiceError::Unavailable)
        )
    }

    /// Raw response body, when the failure carried one.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            MintError::Parse { raw_body, .. } => Some(raw_body),
            MintError::Service(ServiceError::Status { body, .. }) => Some(body),
            _ => None,
        }
    }

    /// Message suitable for showing to the person who pressed "mint".
    pub fn user_message(&self) -> String {
        match self {
            MintError::Config(e) => e.to_string(),
            MintError::Validation(ValidationError::MissingFields(fields)) => format!(
                "Please fill in all fields before minting (missing: {}).",
                join(fields)
            ),
            MintError::Validation(e) => format!("{}.", capitalize(&e.to_string())),
            MintError::Transport(TransportError::Timeout) => {
                "Request timed out. Please try again.".to_string()
            }
            MintError::Transport(TransportError::Connection(msg)) => {
                format!("Request failed: {}", msg)
            }
            MintError::Service(ServiceError::Unavailable) => {
                "Service temporarily unavailable. Please try again in a few moments.".to_string()
            }
            MintError::Service(ServiceError::Status { status, .. }) => {
                format!("Request failed with status code {}", status)
            }
            MintError::Parse { message, raw_body } => format!(
                "Failed to parse response: {}, Raw response: {}",
                message, raw_body
            ),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_502_is_distinct_from_500() {
        let unavailable = MintError::from(ServiceError::Unavailable);
        let failed = MintError::from(ServiceError::Status {
            status: 500,
            body: "boom".to_string(),
        });

        assert_eq!(unavailable.kind(), "service_unavailable");
        assert_eq!(failed.kind(), "service");
        assert!(unavailable.is_retryable());
        assert!(!failed.is_retryable());
        assert!(unavailable.user_message().contains("try again"));
        assert_eq!(
            failed.user_message(),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_timeout_message_and_retry_hint() {
        let err = MintError::from(TransportError::Timeout);
        assert_eq!(err.kind(), "timeout");
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "Request timed out. Please try again.");
    }

    #[test]
    fn test_connection_message_keeps_cause() {
        let err = MintError::from(TransportError::Connection(
            "tcp connect error: Connection refused".to_string(),
        ));
        assert!(!err.is_retryable());
        assert!(err.user_message().ends_with("Connection refused"));
    }

    #[test]
    fn test_parse_error_carries_raw_body() {
        let err = MintError::parse("empty response from server", "");
        assert_eq!(err.kind(), "parse");
        assert_eq!(err.raw_body(), Some(""));
        assert!(err.user_message().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let err = MintError::from(ValidationError::MissingFields(vec![
            Field::CharacterName,
            Field::VoiceSampleUrl,
        ]));
        assert_eq!(
            err.to_string(),
            "Validation error: missing required field(s): character name, voice sample URL"
        );
        assert!(err.user_message().contains("character name, voice sample URL"));
    }

    #[test]
    fn test_unreachable_url_message() {
        let err = MintError::from(ValidationError::UnreachableUrls(vec![UnreachableUrl {
            field: Field::ImageUrl,
            url: "https://example.com/a.png".to_string(),
            reason: "HTTP 404".to_string(),
        }]));
        assert_eq!(
            err.user_message(),
            "Unreachable URL(s): image URL https://example.com/a.png (HTTP 404)."
        );
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = MintError::from(ConfigError::MissingApiKey);
        assert_eq!(err.kind(), "configuration");
        assert_eq!(
            err.user_message(),
            "API key not found in environment variables"
        );
    }
}
