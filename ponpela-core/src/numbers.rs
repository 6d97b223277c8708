//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 and saturate it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    cast::<f64, i64>(rounded).unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Convert a decimal amount in currency units to integer cents.
///
/// Rounds half away from zero, so `10.005` becomes `1001`.
#[must_use]
pub fn units_to_cents(value: f64) -> i64 {
    round_f64_to_i64(value * 100.0)
}

/// Parse a decimal price string (`"10.00"`, `" 7.5 "`) into cents.
///
/// Only the leading number counts, so `"12,50"` is 12 and `"10 ₪"` is 10.
/// Returns `None` when the string does not start with a finite number.
#[must_use]
pub fn parse_price_cents(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    trimmed
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(units_to_cents)
}

/// Convert a quantity to the signed domain used by price math.
#[must_use]
pub fn quantity_to_i64(qty: u32) -> i64 {
    i64::from(qty)
}
