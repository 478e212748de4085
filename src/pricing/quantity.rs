//! Quantity input parsing and normalization

use crate::config::{MAX_INPUT_QUANTITY, MIN_QUANTITY};

/// Reads the leading integer of a form value: surrounding whitespace and an
/// optional sign, then as many ASCII digits as follow. Anything after the
/// digits is ignored, so `"41 pz"` reads as 41 and `"3.9"` as 3.
///
/// Returns `None` when no digit follows the sign. Values beyond `i64`
/// saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if run == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..run].bytes() {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    Some(value)
}

/// Quantity the pricing engine works with: unparseable or too small input
/// becomes the minimum order. There is no upper bound here.
pub fn normalize_quantity(raw: &str) -> u64 {
    normalize_parsed(parse_leading_int(raw))
}

pub fn normalize_parsed(parsed: Option<i64>) -> u64 {
    match parsed {
        Some(q) if q >= i64::from(MIN_QUANTITY) => q as u64,
        _ => u64::from(MIN_QUANTITY),
    }
}

/// Clamp applied by the quantity text field before the slider and the
/// engine see the value.
pub fn clamp_input_quantity(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(q) => q.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_INPUT_QUANTITY)) as u32,
        None => MIN_QUANTITY,
    }
}
