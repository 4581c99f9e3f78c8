//! # hipay - Hipay payment gateway client
//!
//! An async Rust client for the Hipay payment gateway HTTP API.
//! This library covers checkout creation, checkout and payment lookups,
//! payment correction and cancellation, and daily statements.
//!
//! ```no_run
//! use hipay::{Gateway, HipayClient};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> hipay::Result<()> {
//! let client = HipayClient::new("https://test.hipay.mn", "token", "entity-id")?;
//! let checkout = client.checkout(Decimal::new(1000, 0)).await?;
//! println!("scan: {:?}", checkout.qr_data);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{Gateway, HipayClient};
pub use config::{Endpoints, HipayConfig, DEFAULT_CURRENCY};
pub use error::{HipayError, Result};
pub use transport::{HttpTransport, RequestHook};
pub use types::*;

/// Current version of the hipay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(DEFAULT_CURRENCY, "MNT");
        assert_eq!(SUCCESS_CODE, 1);
    }
}
