//! Order page settings and environment variable handling

use std::env;
use tracing::warn;
use crate::{pricing::TierTable, types::PriceTier};

// Quantity constants
pub const MIN_QUANTITY: u32 = 12;
pub const MAX_INPUT_QUANTITY: u32 = 1000;

// Upload constants
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024; // 16MB
pub const ALLOWED_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "stl", "obj", "step", "3mf", "gcode"];

// Scan animation constants
pub const DEFAULT_SCAN_TICK_MS: u64 = 50;
pub const DEFAULT_SCAN_SETTLE_MS: u64 = 500;
pub const MAX_SCAN_TICK_MS: u64 = 1000;
pub const MAX_SCAN_SETTLE_MS: u64 = 5000;

// Checkout constants
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub payment_endpoint: Option<String>,
    pub http_timeout_secs: u64,
    pub scan_tick_ms: u64,
    pub scan_settle_ms: u64,
    pub max_upload_bytes: u64,
    pub tier_table: TierTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment_endpoint: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            scan_tick_ms: DEFAULT_SCAN_TICK_MS,
            scan_settle_ms: DEFAULT_SCAN_SETTLE_MS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            tier_table: TierTable::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self {
            payment_endpoint: env::var("PAYMENT_ENDPOINT")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
                .clamp(1, MAX_HTTP_TIMEOUT_SECS),
            scan_tick_ms: env::var("SCAN_TICK_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SCAN_TICK_MS)
                .min(MAX_SCAN_TICK_MS),
            scan_settle_ms: env::var("SCAN_SETTLE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SCAN_SETTLE_MS)
                .min(MAX_SCAN_SETTLE_MS),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
                .min(DEFAULT_MAX_UPLOAD_BYTES),
            tier_table: env::var("PRICE_TIERS")
                .ok()
                .map(|json| parse_tier_table(&json))
                .unwrap_or_default(),
        }
    }
}

/// Reads a JSON array of tiers. Anything unreadable or malformed keeps the
/// default table so the page can still quote.
pub fn parse_tier_table(json: &str) -> TierTable {
    let tiers: Vec<PriceTier> = match serde_json::from_str(json) {
        Ok(tiers) => tiers,
        Err(e) => {
            warn!("⚠️ PRICE_TIERS is not valid JSON ({}), using default tiers", e);
            return TierTable::default();
        }
    };

    TierTable::new(tiers).unwrap_or_else(|e| {
        warn!("⚠️ {}, using default tiers", e);
        TierTable::default()
    })
}
