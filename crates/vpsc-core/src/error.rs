//! Error taxonomy for Sakura VPS API operations.
//!
//! Every failure surfaced by this crate is one of the closed set of
//! [`Error`] kinds, so callers branch on the kind rather than on raw HTTP
//! status numbers. Classification is centralised in [`classify_status`];
//! the dispatcher performs no local recovery and never swallows detail.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a structured validation error.
///
/// The upstream API reports validation problems as `{code, message}`
/// pairs, either request-wide (`non_field_errors`) or keyed by the input
/// field they refer to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorItem {
    /// Short identifier for the problem, e.g. `required`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Structured per-field validation detail from a 400 response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Errors attributed to the request as a whole rather than one field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_field_errors: Option<Vec<ErrorItem>>,
    /// Errors keyed by the offending input field.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<ErrorItem>>,
}

/// Error payload returned by the API for non-success statuses.
///
/// All fields are optional: bodies are parsed permissively and a payload
/// that cannot be parsed at all falls back to the raw response text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// Identifier for the error class, e.g. `invalid` or `not_found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured validation detail, present when `code` is `invalid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

/// Main error type for VPS API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request was rejected as invalid (HTTP 400).
    #[error("Validation failed: {message}")]
    Validation {
        /// Error class reported by the API (`invalid`, `parse_error`, ...).
        code: Option<String>,
        /// Human-readable description.
        message: String,
        /// Per-field detail, populated only when `code` is `invalid`.
        errors: Option<ErrorDetails>,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request conflicts with the resource state (HTTP 409).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request was throttled (HTTP 429).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The service is temporarily unavailable (HTTP 503).
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Any other non-success HTTP status.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// Raw HTTP status code.
        status: u16,
        /// Raw response body, preserved for diagnosis.
        body: String,
    },

    /// A success response body did not parse as the expected shape.
    #[error("Failed to decode response body: {message}")]
    DecodeFailure {
        /// Description of the parse failure.
        message: String,
        /// Raw response body, preserved for diagnosis.
        body: String,
    },

    /// A network-level failure: connection refused, timeout, DNS.
    ///
    /// Distinguished from HTTP error responses; never carries a status.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response did not match the declared expectation, e.g. an empty
    /// body where exactly one object was required.
    #[error("Response violated the operation contract: {0}")]
    ContractViolation(String),

    /// A request body failed to serialize.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Configuration error (missing API key, malformed host URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized result type for VPS API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the stable code identifying this error kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimited(_) => "RATE_LIMITED",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::DecodeFailure { .. } => "DECODE_FAILURE",
            Self::Transport(_) => "TRANSPORT_FAILURE",
            Self::ContractViolation(_) => "CONTRACT_VIOLATION",
            Self::Encode(_) => "ENCODE_FAILURE",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true for failures a caller may reasonably retry.
    ///
    /// The dispatcher itself never retries; this is a hint for callers
    /// implementing their own backoff policy.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited(_) | Self::Unavailable(_) | Self::Transport(_)
        )
    }
}

/// Map a non-success HTTP status and its raw body onto an [`Error`].
///
/// The body is parsed as a [`ProblemDetails`] payload when possible; its
/// `message` becomes the error message, falling back to the raw text.
/// Per-field validation detail is preserved unchanged for 400 responses
/// whose payload carries `code == "invalid"`.
#[must_use]
pub fn classify_status(status: StatusCode, body: String) -> Error {
    let detail: Option<ProblemDetails> = serde_json::from_str(&body).ok();
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone())
        .unwrap_or_else(|| body.clone());

    match status.as_u16() {
        400 => {
            let (code, errors) = match detail {
                Some(d) => {
                    let errors = if d.code.as_deref() == Some("invalid") {
                        d.errors
                    } else {
                        None
                    };
                    (d.code, errors)
                }
                None => (None, None),
            };
            Error::Validation {
                code,
                message,
                errors,
            }
        }
        404 => Error::NotFound(message),
        409 => Error::Conflict(message),
        429 => Error::RateLimited(message),
        503 => Error::Unavailable(message),
        _ => Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(status: u16, body: &str) -> Error {
        classify_status(StatusCode::from_u16(status).unwrap(), body.to_string())
    }

    #[test]
    fn status_400_maps_to_validation() {
        let err = classify(400, r#"{"code":"bad_request","message":"nope"}"#);
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.error_code(), "VALIDATION");
    }

    #[test]
    fn validation_detail_preserved_when_code_invalid() {
        let body = r#"{
            "code": "invalid",
            "message": "Invalid input.",
            "errors": {
                "non_field_errors": [
                    {"code": "required", "message": "this field is required"}
                ],
                "name": [
                    {"code": "max_length", "message": "too long"}
                ]
            }
        }"#;

        let Error::Validation {
            code,
            message,
            errors,
        } = classify(400, body)
        else {
            panic!("expected Validation");
        };

        assert_eq!(code.as_deref(), Some("invalid"));
        assert_eq!(message, "Invalid input.");

        let errors = errors.expect("detail should survive classification");
        let non_field = errors.non_field_errors.unwrap();
        assert_eq!(non_field.len(), 1);
        assert_eq!(non_field[0].code.as_deref(), Some("required"));
        assert_eq!(
            non_field[0].message.as_deref(),
            Some("this field is required")
        );
        assert_eq!(errors.fields["name"][0].code.as_deref(), Some("max_length"));
    }

    #[test]
    fn validation_detail_dropped_unless_invalid() {
        let body = r#"{"code":"parse_error","errors":{"name":[{"code":"x"}]}}"#;
        let Error::Validation { code, errors, .. } = classify(400, body) else {
            panic!("expected Validation");
        };
        assert_eq!(code.as_deref(), Some("parse_error"));
        assert!(errors.is_none());
    }

    #[test]
    fn unparseable_400_body_falls_back_to_raw_text() {
        let Error::Validation { code, message, .. } = classify(400, "<html>oops</html>") else {
            panic!("expected Validation");
        };
        assert!(code.is_none());
        assert_eq!(message, "<html>oops</html>");
    }

    #[test]
    fn known_statuses_map_to_their_kinds() {
        assert!(matches!(
            classify(404, r#"{"code":"not_found","message":"missing"}"#),
            Error::NotFound(msg) if msg == "missing"
        ));
        assert!(matches!(classify(409, "conflict"), Error::Conflict(_)));
        assert!(matches!(classify(429, "slow down"), Error::RateLimited(_)));
        assert!(matches!(classify(503, "later"), Error::Unavailable(_)));
    }

    #[test]
    fn unknown_status_preserves_status_and_body() {
        let err = classify(418, "short and stout");
        assert_eq!(err.error_code(), "UNEXPECTED_STATUS");
        let Error::UnexpectedStatus { status, body } = err else {
            panic!("expected UnexpectedStatus");
        };
        assert_eq!(status, 418);
        assert_eq!(body, "short and stout");
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(Error::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(Error::Conflict("x".into()).error_code(), "CONFLICT");
        assert_eq!(Error::RateLimited("x".into()).error_code(), "RATE_LIMITED");
        assert_eq!(Error::Unavailable("x".into()).error_code(), "UNAVAILABLE");
        assert_eq!(
            Error::Transport("x".into()).error_code(),
            "TRANSPORT_FAILURE"
        );
        assert_eq!(
            Error::ContractViolation("x".into()).error_code(),
            "CONTRACT_VIOLATION"
        );
        assert_eq!(
            Error::DecodeFailure {
                message: "x".into(),
                body: String::new()
            }
            .error_code(),
            "DECODE_FAILURE"
        );
        assert_eq!(Error::Encode("x".into()).error_code(), "ENCODE_FAILURE");
        assert_eq!(Error::Config("x".into()).error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn retryable_kinds() {
        assert!(Error::RateLimited("x".into()).is_retryable());
        assert!(Error::Unavailable("x".into()).is_retryable());
        assert!(Error::Transport("x".into()).is_retryable());
        assert!(!Error::NotFound("x".into()).is_retryable());
        assert!(!Error::Validation {
            code: None,
            message: "x".into(),
            errors: None
        }
        .is_retryable());
    }

    #[test]
    fn display_renders_kind_and_message() {
        let err = Error::NotFound("server 12".to_string());
        assert_eq!(err.to_string(), "Not found: server 12");

        let err = Error::UnexpectedStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected HTTP status 502: bad gateway");
    }

    #[test]
    fn from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
