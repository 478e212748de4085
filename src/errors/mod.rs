//! Error types for checkout, upload and tier configuration

pub mod checkout_error;

pub use checkout_error::*;
