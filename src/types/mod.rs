//! Core data types and structures

pub mod tier;
pub mod pricing;
pub mod scan;
pub mod checkout;
pub mod view;

pub use tier::*;
pub use pricing::*;
pub use scan::*;
pub use checkout::*;
pub use view::*;
