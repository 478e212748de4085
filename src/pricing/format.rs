//! Currency display for totals
//!
//! Totals are shown the way an Italian locale prints numbers: `.` groups
//! thousands, `,` separates decimals, at most three fraction digits and no
//! trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "€";
const MAX_FRACTION_DIGITS: u32 = 3;

pub fn format_total(total: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_amount(total))
}

pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

/// Plain decimal form sent to the payment endpoint (`151.7`).
pub fn wire_amount(total: Decimal) -> String {
    total.normalize().to_string()
}
