//! Client configuration

use crate::{HipayError, Result};
use std::time::Duration;

/// Currency used for checkouts unless configured otherwise
pub const DEFAULT_CURRENCY: &str = "MNT";

/// Per-operation paths, relative to the gateway endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub checkout: String,
    pub checkout_get: String,
    pub payment_get: String,
    pub payment_correction: String,
    pub payment_cancel: String,
    pub statement: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            checkout: "/checkout".to_string(),
            checkout_get: "/checkout/get".to_string(),
            payment_get: "/payment/get".to_string(),
            payment_correction: "/payment/correction".to_string(),
            payment_cancel: "/payment/cancel".to_string(),
            statement: "/statement".to_string(),
        }
    }
}

/// Configuration for a [`HipayClient`](crate::HipayClient)
#[derive(Clone)]
pub struct HipayConfig {
    /// Base URL of the gateway, e.g. `https://test.hipay.mn`
    pub endpoint: String,
    /// Bearer token sent with every request
    pub token: String,
    /// Merchant entity identifier sent with every request
    pub entity_id: String,
    /// Currency for new checkouts
    pub currency: String,
    /// Request timeout
    pub timeout: Option<Duration>,
    pub endpoints: Endpoints,
}

impl std::fmt::Debug for HipayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HipayConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("entity_id", &self.entity_id)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl HipayConfig {
    /// Create a new config with default currency and paths
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            entity_id: entity_id.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            timeout: None,
            endpoints: Endpoints::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(HipayError::config("Endpoint URL cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(HipayError::config(
                "Endpoint URL must start with http:// or https://",
            ));
        }

        if self.token.is_empty() {
            return Err(HipayError::config("Token cannot be empty"));
        }

        if self.entity_id.is_empty() {
            return Err(HipayError::config("Entity ID cannot be empty"));
        }

        if self.currency.is_empty() {
            return Err(HipayError::config("Currency cannot be empty"));
        }

        Ok(())
    }

    /// Set the checkout currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the operation paths
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HipayConfig::new("https://test.hipay.mn", "token", "ent_1");
        assert_eq!(config.currency, "MNT");
        assert_eq!(config.timeout, None);
        assert_eq!(config.endpoints.checkout, "/checkout");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = HipayConfig::new("", "token", "ent_1");
        assert!(config.validate().is_err());

        let config = HipayConfig::new("ftp://test.hipay.mn", "token", "ent_1");
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("must start with http:// or https://"));

        let config = HipayConfig::new("https://test.hipay.mn", "", "ent_1");
        assert!(config.validate().unwrap_err().to_string().contains("Token"));

        let config = HipayConfig::new("https://test.hipay.mn", "token", "");
        assert!(config.validate().unwrap_err().to_string().contains("Entity ID"));

        let config = HipayConfig::new("https://test.hipay.mn", "token", "ent_1").with_currency("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = HipayConfig::new("https://test.hipay.mn", "secret-token", "ent_1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("ent_1"));
    }
}
