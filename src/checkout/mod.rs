//! Order form handling and payment session submission

pub mod form;
pub mod client;
pub mod session;

pub use form::*;
pub use client::*;
pub use session::*;
