//! Request and response models for the Hipay gateway API

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Status code the gateway uses for a successful call
pub const SUCCESS_CODE: i64 = 1;

/// Decode an explicit `null` as the type's default, like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Field-level problem reported by the gateway on a failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Request field the issue refers to
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    /// Human-readable description of the issue
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue: String,
}

impl ErrorDetail {
    /// Create a new error detail
    pub fn new(field: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            issue: issue.into(),
        }
    }
}

/// Envelope shared by every gateway response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatus {
    /// Gateway status code, `1` on success
    pub code: i64,
    /// Human-readable description of the outcome
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Field-level issues, present on failure
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<ErrorDetail>,
}

impl ResponseStatus {
    /// Whether the gateway reported success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Checkout creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub entity_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    /// Ask the gateway to return QR payload data
    pub qr_data: bool,
    pub signal: bool,
}

/// Request addressing a single payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub entity_id: String,
    pub payment_id: String,
}

/// Statement request for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRequest {
    pub entity_id: String,
    pub date: String,
}

/// Response to a checkout creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub checkout_id: Option<String>,
    /// QR payload the payer scans to complete the checkout
    #[serde(default)]
    pub qr_data: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
}

/// Response to a checkout lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutGetResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub checkout_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Checkout state as reported by the gateway
    #[serde(default, rename = "status")]
    pub state: Option<String>,
    /// Payment that completed the checkout, once paid
    #[serde(default)]
    pub payment_id: Option<String>,
}

/// Response to a payment lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentGetResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub checkout_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "status")]
    pub state: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

/// Response to a payment correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCorrectionResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default, rename = "status")]
    pub state: Option<String>,
}

/// Response to a payment cancellation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCancelResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default, rename = "status")]
    pub state: Option<String>,
}

/// One transaction on a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub checkout_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default, rename = "status")]
    pub state: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

/// Response to a statement request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<StatementLine>,
}
