//! Volume pricing tier types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One volume-pricing bracket. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Identifier of the matching row on the pricing table.
    pub id: String,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub unit_price: Decimal,
}

impl PriceTier {
    pub fn new(id: impl Into<String>, min_quantity: u32, max_quantity: u32, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            min_quantity,
            max_quantity,
            unit_price,
        }
    }

    pub fn contains(&self, quantity: u64) -> bool {
        quantity >= u64::from(self.min_quantity) && quantity <= u64::from(self.max_quantity)
    }
}
