//! Order form and payment session types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 100;
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Free-text fields of the order form, as typed by the customer. The
/// quantity is not part of it: checkout takes it from the current
/// `PricingResult` so it always matches the displayed total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub date: Option<NaiveDate>,
    pub message: String,
}

/// Body returned by the payment-session endpoint. Both success and error
/// responses share this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentSessionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A created payment session the browser should be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRedirect {
    pub checkout_url: String,
    pub session_id: Option<String>,
}
