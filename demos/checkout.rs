//! Create a checkout and poll it once.
//!
//! Usage: `cargo run --example checkout -- <endpoint> <token> <entity-id> <amount>`

use hipay::{Gateway, HipayClient, HipayConfig};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hipay=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [endpoint, token, entity_id, amount] = args.as_slice() else {
        eprintln!("usage: checkout <endpoint> <token> <entity-id> <amount>");
        std::process::exit(2);
    };

    let config =
        HipayConfig::new(endpoint, token, entity_id).with_timeout(Duration::from_secs(30));
    let client = HipayClient::with_config(config)?;

    let checkout = client.checkout(Decimal::from_str(amount)?).await?;
    println!("Checkout created: {:?}", checkout.checkout_id);
    println!("QR data: {:?}", checkout.qr_data);

    if let Some(checkout_id) = checkout.checkout_id.as_deref() {
        let state = client.checkout_get(checkout_id).await?;
        println!("Checkout state: {:?}", state.state);
    }

    Ok(())
}
