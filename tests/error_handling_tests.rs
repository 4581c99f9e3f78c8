//! Error handling tests for hipay

use hipay::{ErrorDetail, HipayError};

#[test]
fn test_api_error_message() {
    let error = HipayError::api(
        0,
        "Invalid request",
        vec![ErrorDetail::new("amount", "must be greater than zero")],
    );

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Invalid request"),
        "Error message MUST contain the gateway description - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("amount") && error_msg.contains("must be greater than zero"),
        "Error message MUST contain the first detail's field and issue - actual: {}",
        error_msg
    );
}

#[test]
fn test_api_error_keeps_every_detail() {
    let details = vec![
        ErrorDetail::new("amount", "must be greater than zero"),
        ErrorDetail::new("currency", "unsupported"),
        ErrorDetail::new("entityId", "unknown"),
    ];
    let error = HipayError::api(0, "Invalid request", details.clone());

    assert_eq!(error.details(), details.as_slice());
    assert!(
        !error.to_string().contains("currency"),
        "Only the first detail is rendered - actual: {}",
        error
    );
}

#[test]
fn test_api_error_without_details() {
    let error = HipayError::api(5, "Service unavailable", Vec::new());

    assert_eq!(error.to_string(), "Service unavailable");
    assert_eq!(error.code(), Some(5));
}

#[test]
fn test_validation_error() {
    let error = HipayError::validation("paymentId cannot be empty");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Validation error"),
        "Error message MUST contain 'Validation error' - actual: {}",
        error_msg
    );
    assert!(error.details().is_empty());
    assert!(!error.is_transport());
}

#[test]
fn test_config_error() {
    let error = HipayError::config("Token cannot be empty");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Configuration error") && error_msg.contains("Token cannot be empty"),
        "Error message MUST contain the configuration problem - actual: {}",
        error_msg
    );
}

#[test]
fn test_status_error() {
    let error = HipayError::Status {
        status: 503,
        body: "upstream unavailable".to_string(),
    };

    let error_msg = error.to_string();
    assert!(error_msg.contains("503"), "actual: {}", error_msg);
    assert!(error_msg.contains("upstream unavailable"), "actual: {}", error_msg);
    assert!(error.is_transport());
    assert_eq!(error.code(), None);
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: HipayError = json_error.into();

    assert!(error.to_string().starts_with("JSON error"));
    assert!(error.is_transport());
}
