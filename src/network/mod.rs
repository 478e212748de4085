//! HTTP transport helpers

pub mod retry;

pub use retry::*;
