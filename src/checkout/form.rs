//! Order form sanitization and submission gating

use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;
use crate::{
    errors::{CheckoutError, CheckoutResult},
    pricing::wire_amount,
    types::{LogoFile, OrderForm, PricingResult, ScanReport, MAX_EMAIL_CHARS, MAX_MESSAGE_CHARS, MAX_NAME_CHARS},
};

fn truncate_chars(value: &str, max: usize) -> String {
    value.trim().chars().take(max).collect()
}

impl OrderForm {
    /// Trims the free-text fields to the lengths the payment endpoint keeps.
    pub fn sanitize(&self) -> Self {
        Self {
            name: truncate_chars(&self.name, MAX_NAME_CHARS),
            email: truncate_chars(&self.email, MAX_EMAIL_CHARS),
            date: self.date,
            message: truncate_chars(&self.message, MAX_MESSAGE_CHARS),
        }
    }
}

/// Checks that a logo was picked and that its scan has finished.
pub fn ensure_ready<'a>(
    file: Option<&'a LogoFile>,
    scan: Option<&ScanReport>,
) -> CheckoutResult<&'a LogoFile> {
    let file = file.ok_or(CheckoutError::MissingFile)?;
    match scan {
        Some(report) if report.file_name == file.name => Ok(file),
        _ => Err(CheckoutError::ScanPending),
    }
}

/// Everything sent to the payment-session endpoint for one order.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub form: OrderForm,
    pub quantity: u64,
    pub total: Decimal,
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl CheckoutRequest {
    pub fn new(form: &OrderForm, pricing: &PricingResult, file: &LogoFile, contents: Vec<u8>) -> Self {
        Self {
            form: form.sanitize(),
            quantity: pricing.quantity,
            total: pricing.total,
            file_name: file.name.clone(),
            contents,
        }
    }

    /// Builds a fresh multipart body; a body cannot be reused across sends.
    pub fn to_multipart(&self) -> Form {
        Form::new()
            .text("name", self.form.name.clone())
            .text("email", self.form.email.clone())
            .text("quantity", self.quantity.to_string())
            .text(
                "date",
                self.form
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            )
            .text("message", self.form.message.clone())
            .text("total_price", wire_amount(self.total))
            .part(
                "file",
                Part::bytes(self.contents.clone()).file_name(self.file_name.clone()),
            )
    }
}
