//! Price tier table and price computation

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::debug;
use crate::{
    config::MIN_QUANTITY,
    errors::{CheckoutError, CheckoutResult},
    pricing::quantity::{normalize_parsed, parse_leading_int},
    types::{PriceTier, PricingResult},
};

pub const TIER_SMALL: &str = "tier-small";
pub const TIER_MEDIUM: &str = "tier-medium";
pub const TIER_CORPORATE: &str = "tier-corporate";

/// Ordered, contiguous set of volume brackets. The last bracket also prices
/// every quantity above its own upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<PriceTier>,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                PriceTier::new(TIER_SMALL, 12, 40, dec!(4.00)),
                PriceTier::new(TIER_MEDIUM, 41, 99, dec!(3.70)),
                PriceTier::new(TIER_CORPORATE, 100, 10000, dec!(3.40)),
            ],
        }
    }
}

impl TierTable {
    /// Builds a table after checking that the brackets are well formed:
    /// non-empty, ascending, gap-free, and starting at or below the minimum
    /// order so every normalized quantity lands in a bracket.
    pub fn new(tiers: Vec<PriceTier>) -> CheckoutResult<Self> {
        let invalid = |reason: String| CheckoutError::InvalidTierTable { reason };

        let first = tiers.first().ok_or_else(|| invalid("no tiers configured".to_string()))?;
        if first.min_quantity > MIN_QUANTITY {
            return Err(invalid(format!(
                "first tier {} starts at {}, above the minimum order of {}",
                first.id, first.min_quantity, MIN_QUANTITY
            )));
        }

        for tier in &tiers {
            if tier.id.trim().is_empty() {
                return Err(invalid("tier with empty id".to_string()));
            }
            if tier.min_quantity > tier.max_quantity {
                return Err(invalid(format!(
                    "tier {} has min {} above max {}",
                    tier.id, tier.min_quantity, tier.max_quantity
                )));
            }
            if tier.unit_price <= Decimal::ZERO {
                return Err(invalid(format!(
                    "tier {} has non-positive unit price {}",
                    tier.id, tier.unit_price
                )));
            }
        }

        for pair in tiers.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if u64::from(next.min_quantity) != u64::from(prev.max_quantity) + 1 {
                return Err(invalid(format!(
                    "tier {} must start right after {} ends at {}, found {}",
                    next.id, prev.id, prev.max_quantity, next.min_quantity
                )));
            }
            if next.id == prev.id {
                return Err(invalid(format!("duplicate tier id {}", next.id)));
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// Bracket containing `quantity`, or the last bracket when the quantity
    /// is above every upper bound.
    pub fn tier_for(&self, quantity: u64) -> &PriceTier {
        self.tiers
            .iter()
            .find(|tier| tier.contains(quantity))
            .unwrap_or_else(|| self.top_tier())
    }

    pub fn active_tier_id(&self, quantity: u64) -> &str {
        &self.tier_for(quantity).id
    }

    fn top_tier(&self) -> &PriceTier {
        // `new` and `default` both guarantee at least one tier.
        &self.tiers[self.tiers.len() - 1]
    }

    /// Prices raw form input. Never fails: malformed or small input is
    /// priced as the minimum order.
    pub fn compute_price(&self, raw_quantity: &str) -> PricingResult {
        self.price_normalized(normalize_parsed(parse_leading_int(raw_quantity)))
    }

    pub fn compute_for_quantity(&self, quantity: i64) -> PricingResult {
        self.price_normalized(normalize_parsed(Some(quantity)))
    }

    fn price_normalized(&self, quantity: u64) -> PricingResult {
        let active_tier = self.tier_for(quantity).clone();
        let total = Decimal::from(quantity)
            .checked_mul(active_tier.unit_price)
            .unwrap_or(Decimal::MAX);

        debug!(
            quantity,
            tier = %active_tier.id,
            unit_price = %active_tier.unit_price,
            total = %total,
            "Computed price"
        );

        PricingResult {
            quantity,
            active_tier,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> TierTable {
        TierTable::default()
    }

    #[test]
    fn test_reference_scenarios() {
        let t = table();

        let r = t.compute_price("12");
        assert_eq!(r.active_tier.id, TIER_SMALL);
        assert_eq!(r.total, dec!(48.00));

        let r = t.compute_price("41");
        assert_eq!(r.active_tier.id, TIER_MEDIUM);
        assert_eq!(r.total, dec!(151.70));

        let r = t.compute_price("100");
        assert_eq!(r.active_tier.id, TIER_CORPORATE);
        assert_eq!(r.total, dec!(340.00));
    }

    #[test]
    fn test_malformed_input_prices_minimum_order() {
        let t = table();
        for raw in ["abc", "-5", "", "0", "11"] {
            let r = t.compute_price(raw);
            assert_eq!(r.quantity, 12, "input {:?}", raw);
            assert_eq!(r.active_tier.id, TIER_SMALL);
            assert_eq!(r.total, dec!(48.00));
        }
    }

    #[test]
    fn test_bracket_edges() {
        let t = table();
        assert_eq!(t.active_tier_id(40), TIER_SMALL);
        assert_eq!(t.active_tier_id(41), TIER_MEDIUM);
        assert_eq!(t.active_tier_id(99), TIER_MEDIUM);
        assert_eq!(t.active_tier_id(100), TIER_CORPORATE);
        assert_eq!(t.active_tier_id(10000), TIER_CORPORATE);
    }

    #[test]
    fn test_quantities_above_ceiling_use_top_tier() {
        let r = table().compute_for_quantity(25_000);
        assert_eq!(r.active_tier.id, TIER_CORPORATE);
        assert_eq!(r.total, dec!(85000.00));
    }

    #[test]
    fn test_huge_quantity_does_not_panic() {
        let r = table().compute_for_quantity(i64::MAX);
        assert_eq!(r.active_tier.id, TIER_CORPORATE);
        assert!(r.total > Decimal::ZERO);
    }

    #[test]
    fn test_rejects_gapped_table() {
        let err = TierTable::new(vec![
            PriceTier::new("a", 12, 40, dec!(4)),
            PriceTier::new("b", 42, 99, dec!(3)),
        ])
        .unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidTierTable { .. }));
    }

    #[test]
    fn test_rejects_overlap_empty_and_bad_prices() {
        assert!(TierTable::new(vec![]).is_err());
        assert!(TierTable::new(vec![
            PriceTier::new("a", 12, 40, dec!(4)),
            PriceTier::new("b", 40, 99, dec!(3)),
        ])
        .is_err());
        assert!(TierTable::new(vec![PriceTier::new("a", 12, 40, dec!(0))]).is_err());
        assert!(TierTable::new(vec![PriceTier::new("a", 50, 40, dec!(1))]).is_err());
        assert!(TierTable::new(vec![PriceTier::new("a", 20, 40, dec!(1))]).is_err());
    }

    #[test]
    fn test_accepts_default_layout() {
        let rebuilt = TierTable::new(table().tiers().to_vec()).expect("valid table");
        assert_eq!(rebuilt, table());
    }

    proptest! {
        #[test]
        fn prop_small_tier(q in 12i64..=40) {
            let r = table().compute_for_quantity(q);
            prop_assert_eq!(r.active_tier.id.as_str(), TIER_SMALL);
            prop_assert_eq!(r.total, Decimal::from(q) * dec!(4.00));
        }

        #[test]
        fn prop_medium_tier(q in 41i64..=99) {
            let r = table().compute_for_quantity(q);
            prop_assert_eq!(r.active_tier.id.as_str(), TIER_MEDIUM);
            prop_assert_eq!(r.total, Decimal::from(q) * dec!(3.70));
        }

        #[test]
        fn prop_corporate_tier(q in 100i64..=10000) {
            let r = table().compute_for_quantity(q);
            prop_assert_eq!(r.active_tier.id.as_str(), TIER_CORPORATE);
            prop_assert_eq!(r.total, Decimal::from(q) * dec!(3.40));
        }

        #[test]
        fn prop_fallback_above_ceiling(q in 10001i64..=10_000_000) {
            let r = table().compute_for_quantity(q);
            prop_assert_eq!(r.active_tier.id.as_str(), TIER_CORPORATE);
            prop_assert_eq!(r.total, Decimal::from(q) * dec!(3.40));
        }

        #[test]
        fn prop_below_minimum_normalizes(q in i64::MIN..12) {
            let r = table().compute_for_quantity(q);
            prop_assert_eq!(r.quantity, 12);
            prop_assert_eq!(r.total, dec!(48.00));
        }

        #[test]
        fn prop_compute_is_idempotent(raw in ".{0,12}") {
            let t = table();
            prop_assert_eq!(t.compute_price(&raw), t.compute_price(&raw));
        }

        #[test]
        fn prop_total_non_negative_and_tier_configured(raw in ".{0,12}") {
            let t = table();
            let r = t.compute_price(&raw);
            prop_assert!(r.total >= Decimal::ZERO);
            prop_assert!(t.tiers().contains(&r.active_tier));
        }
    }
}
