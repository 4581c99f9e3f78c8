//! Error types for the hipay client

use crate::types::ErrorDetail;
use thiserror::Error;

/// Result type alias for hipay operations
pub type Result<T> = std::result::Result<T, HipayError>;

/// Main error type for hipay operations
#[derive(Error, Debug)]
pub enum HipayError {
    /// HTTP client error (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status with a body that is not a gateway envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The gateway answered but reported a non-success code
    #[error("{}", api_message(.description, .details))]
    Api {
        code: i64,
        description: String,
        details: Vec<ErrorDetail>,
    },

    /// Request rejected locally before reaching the gateway
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

fn api_message(description: &str, details: &[ErrorDetail]) -> String {
    match details.first() {
        Some(detail) => format!("{}: {} - {}", description, detail.field, detail.issue),
        None => description.to_string(),
    }
}

impl HipayError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a gateway error from a decoded failure envelope
    pub fn api(code: i64, description: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        Self::Api {
            code,
            description: description.into(),
            details,
        }
    }

    /// Every field-level detail the gateway attached to a failure.
    ///
    /// Empty for errors that did not come from a gateway response.
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Self::Api { details, .. } => details,
            _ => &[],
        }
    }

    /// Gateway status code, if this error came from a gateway response
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True when the error happened below the gateway protocol (network, decoding)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_) | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_uses_first_detail() {
        let error = HipayError::api(
            0,
            "Invalid request",
            vec![
                ErrorDetail::new("amount", "must be positive"),
                ErrorDetail::new("currency", "unsupported"),
            ],
        );

        assert_eq!(error.to_string(), "Invalid request: amount - must be positive");
        assert_eq!(error.details().len(), 2);
        assert_eq!(error.details()[1].field, "currency");
        assert_eq!(error.code(), Some(0));
    }

    #[test]
    fn test_api_message_without_details() {
        let error = HipayError::api(-1, "Internal error", Vec::new());
        assert_eq!(error.to_string(), "Internal error");
        assert!(error.details().is_empty());
    }

    #[test]
    fn test_validation_is_not_transport() {
        let error = HipayError::validation("paymentId cannot be empty");
        assert!(!error.is_transport());
        assert_eq!(error.code(), None);
        assert!(error.to_string().contains("paymentId cannot be empty"));
    }
}
