//! Stamp order page - command line entry point
//!
//! Usage: timbro-checkout <quantity> [logo-path] [name] [email]

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use timbro_checkout::{
    checkout::{OrderSession, PaymentClient},
    scan::ScanSimulator,
    utils, LogoFile, OrderForm, CONFIG,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🖋️  Timbro Checkout v0.3.0");
    info!("📋 Configuration:");
    info!("   Tiers: {}", config.tier_table.tiers().len());
    info!("   Payment endpoint: {}", config.payment_endpoint.as_deref().unwrap_or("(not set)"));
    info!("   Max upload: {} bytes", config.max_upload_bytes);

    let mut args = std::env::args().skip(1);
    let raw_quantity = args.next().unwrap_or_default();
    let logo_path = args.next().map(PathBuf::from);
    let form = OrderForm {
        name: args.next().unwrap_or_default(),
        email: args.next().unwrap_or_default(),
        ..Default::default()
    };

    let mut session = OrderSession::new(config.tier_table.clone());
    session.quantity_field_change(&raw_quantity);
    utils::print_quote(session.pricing(), &config.tier_table);

    let Some(logo_path) = logo_path else {
        utils::render_view(session.view());
        return Ok(());
    };

    let file = LogoFile::from_path(&logo_path)?;
    let contents = tokio::fs::read(&logo_path)
        .await
        .with_context(|| format!("Failed to read {}", logo_path.display()))?;

    let simulator = ScanSimulator::from_config(&config);
    session
        .upload(file, contents, &simulator, config.max_upload_bytes)
        .await?;
    utils::render_view(session.view());

    match PaymentClient::from_config(&config)? {
        Some(client) => {
            let result = session.submit(&form, &client).await;
            utils::render_view(session.view());
            result?;
        }
        None => {
            info!("PAYMENT_ENDPOINT not set, skipping checkout");
        }
    }

    Ok(())
}
