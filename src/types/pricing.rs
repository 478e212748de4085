//! Pricing result types

use rust_decimal::Decimal;
use serde::Serialize;
use super::PriceTier;

/// Outcome of a single price computation. Recomputed on every quantity
/// change and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    pub quantity: u64,
    pub active_tier: PriceTier,
    pub total: Decimal,
}
