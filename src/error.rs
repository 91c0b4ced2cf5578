// src/error.rs
//! Application error types with structured error handling.
//!
//! Errors fall into three families: fetch failures reported by the Notion
//! API or the transport underneath it, rendering failures raised while
//! turning rich text into HTML or Markdown, and configuration failures
//! raised before any request is made. Running out of item budget during a
//! walk is not an error and has no variant here.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Parsed from the `code` field of a Notion error body so that callers can
/// decide on retry or backoff without matching on strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    ///
    /// Nothing in this crate retries; the flag is for the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError => true,
            Self::HttpStatus(status) => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}, HTTP {status}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Unrecognized rich text type: {0}")]
    UnrecognizedSpanKind(String),

    #[error("Property type {0} is not supported for plain text conversion")]
    UnsupportedProperty(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error came from the fetch side (transport or Notion itself).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::NetworkFailure(_)
                | AppError::NotionService { .. }
                | AppError::MalformedResponse { .. }
        )
    }

    /// The typed Notion error code, when the API reported one.
    pub fn notion_code(&self) -> Option<&NotionErrorCode> {
        match self {
            AppError::NotionService { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!(
            NotionErrorCode::from_api_response("rate_limited"),
            NotionErrorCode::RateLimited
        );
        assert_eq!(
            NotionErrorCode::from_api_response("object_not_found"),
            NotionErrorCode::ObjectNotFound
        );
        assert_eq!(
            NotionErrorCode::from_api_response("something_new"),
            NotionErrorCode::Unknown("something_new".to_string())
        );
    }

    #[test]
    fn retryable_classification() {
        assert!(NotionErrorCode::RateLimited.is_retryable());
        assert!(NotionErrorCode::HttpStatus(503).is_retryable());
        assert!(!NotionErrorCode::ValidationFailed.is_retryable());
        assert!(NotionErrorCode::HttpStatus(404).is_not_found());
    }

    #[test]
    fn display_round_trips_code_string() {
        for code in ["rate_limited", "validation_error", "conflict_error"] {
            assert_eq!(NotionErrorCode::from_api_response(code).to_string(), code);
        }
    }

    #[test]
    fn fetch_failure_classification() {
        let err = AppError::NotionService {
            code: NotionErrorCode::ObjectNotFound,
            message: "Could not find block".to_string(),
            status: 404,
        };
        assert!(err.is_fetch_failure());
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::ObjectNotFound));
        assert!(!AppError::UnrecognizedSpanKind("template".into()).is_fetch_failure());
    }
}
