//! Tiered volume pricing

pub mod engine;
pub mod quantity;
pub mod format;

pub use engine::*;
pub use quantity::*;
pub use format::*;
