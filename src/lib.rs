//! Stamp order page logic
//!
//! Prices stamp orders by volume tier, checks and "scans" the uploaded logo,
//! and hands the order to the payment-session service, keeping the page's
//! visible state in one serializable `ViewState`.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pricing;
pub mod scan;
pub mod checkout;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{CheckoutError, CheckoutResult};
pub use pricing::TierTable;
pub use types::*;
