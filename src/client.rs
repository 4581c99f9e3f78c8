//! Hipay gateway client

use crate::config::HipayConfig;
use crate::transport::{HttpTransport, RequestHook};
use crate::types::*;
use crate::{HipayError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;

/// Date format the gateway expects for statements
pub const STATEMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Operations offered by the Hipay gateway.
///
/// [`HipayClient`] is the HTTP implementation; depend on this trait to swap
/// in a stub where no gateway is reachable.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// Create a checkout for `amount` and request QR data for it
    async fn checkout(&self, amount: Decimal) -> Result<CheckoutResponse>;

    /// Look up a checkout
    async fn checkout_get(&self, checkout_id: &str) -> Result<CheckoutGetResponse>;

    /// Look up a payment
    async fn payment_get(&self, payment_id: &str) -> Result<PaymentGetResponse>;

    /// Reconcile a payment with the gateway ledger
    async fn payment_correction(&self, payment_id: &str) -> Result<PaymentCorrectionResponse>;

    /// Cancel a payment. Fails without a request when `payment_id` is empty.
    async fn payment_cancel(&self, payment_id: &str) -> Result<PaymentCancelResponse>;

    /// Fetch the statement for a date
    async fn statement(&self, date: &str) -> Result<StatementResponse>;
}

/// HTTP client for the Hipay gateway
#[derive(Debug, Clone)]
pub struct HipayClient {
    config: HipayConfig,
    transport: HttpTransport,
}

impl HipayClient {
    /// Create a client with default currency and paths
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(HipayConfig::new(endpoint, token, entity_id))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: HipayConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Create a client that sends through an existing reqwest client
    pub fn with_http_client(config: HipayConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_client(&config, client)?;
        Ok(Self { config, transport })
    }

    /// Install a hook that sees every request before it is sent
    pub fn with_request_hook(mut self, request_hook: Arc<dyn RequestHook>) -> Self {
        self.transport = self.transport.with_request_hook(request_hook);
        self
    }

    /// Get the client configuration
    pub fn config(&self) -> &HipayConfig {
        &self.config
    }

    /// Merchant entity this client acts for
    pub fn entity_id(&self) -> &str {
        &self.config.entity_id
    }

    /// Fetch the statement for a calendar day
    pub async fn statement_for(&self, date: NaiveDate) -> Result<StatementResponse> {
        let date = date.format(STATEMENT_DATE_FORMAT).to_string();
        self.statement(&date).await
    }

    fn payment_request(&self, payment_id: &str) -> PaymentRequest {
        PaymentRequest {
            entity_id: self.config.entity_id.clone(),
            payment_id: payment_id.to_string(),
        }
    }

    async fn lookup<Res>(&self, path: &str, id: &str) -> Result<Res>
    where
        Res: serde::de::DeserializeOwned,
    {
        let url = self
            .transport
            .resource_url(path, id, &[("entityId", self.config.entity_id.as_str())])?;
        self.transport.get(url).await
    }
}

#[async_trait::async_trait]
impl Gateway for HipayClient {
    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn checkout(&self, amount: Decimal) -> Result<CheckoutResponse> {
        let request = CheckoutRequest {
            entity_id: self.config.entity_id.clone(),
            amount,
            currency: self.config.currency.clone(),
            qr_data: true,
            signal: false,
        };
        let url = self.transport.url(&self.config.endpoints.checkout)?;
        self.transport.post(url, &request).await
    }

    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn checkout_get(&self, checkout_id: &str) -> Result<CheckoutGetResponse> {
        self.lookup(&self.config.endpoints.checkout_get, checkout_id)
            .await
    }

    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn payment_get(&self, payment_id: &str) -> Result<PaymentGetResponse> {
        self.lookup(&self.config.endpoints.payment_get, payment_id)
            .await
    }

    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn payment_correction(&self, payment_id: &str) -> Result<PaymentCorrectionResponse> {
        let request = self.payment_request(payment_id);
        let url = self.transport.url(&self.config.endpoints.payment_correction)?;
        self.transport.post(url, &request).await
    }

    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn payment_cancel(&self, payment_id: &str) -> Result<PaymentCancelResponse> {
        if payment_id.is_empty() {
            return Err(HipayError::validation("paymentId cannot be empty"));
        }

        let request = self.payment_request(payment_id);
        let url = self.transport.url(&self.config.endpoints.payment_cancel)?;
        self.transport.post(url, &request).await
    }

    #[instrument(skip(self), fields(entity_id = %self.config.entity_id))]
    async fn statement(&self, date: &str) -> Result<StatementResponse> {
        let request = StatementRequest {
            entity_id: self.config.entity_id.clone(),
            date: date.to_string(),
        };
        let url = self.transport.url(&self.config.endpoints.statement)?;
        self.transport.post(url, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HipayClient::new("https://test.hipay.mn", "token", "ent_1").unwrap();
        assert_eq!(client.entity_id(), "ent_1");
        assert_eq!(client.config().currency, "MNT");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = HipayClient::new("test.hipay.mn", "token", "ent_1");
        assert!(matches!(result, Err(HipayError::Config { .. })));
    }

    #[tokio::test]
    async fn test_payment_cancel_empty_id_fails_fast() {
        // Nothing listens here; a request would surface as an HTTP error instead.
        let client = HipayClient::new("http://127.0.0.1:9", "token", "ent_1").unwrap();
        let error = client.payment_cancel("").await.unwrap_err();
        assert!(matches!(error, HipayError::Validation { .. }));
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<HipayClient>();
    }
}
