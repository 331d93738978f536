//! Presentation helpers for currency and percentage figures.
//!
//! Rounding happens here and nowhere in the engine.

/// Placeholder shown for a zero or non-finite amount.
pub const EMPTY: &str = "--";

/// Formats an amount as `$1,234,567.89`, or `-$...` when negative.
///
/// Zero and non-finite amounts render as [`EMPTY`].
pub fn format_currency(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return EMPTY.to_string();
    }
    format_signed_money(value)
}

/// Like [`format_currency`] but zero renders as `$0.00`.
///
/// Used for NPV, where zero is a meaningful break-even figure.
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY.to_string();
    }
    format_signed_money(value)
}

/// Formats a percentage with two decimals, e.g. `12.50 %`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY.to_string();
    }
    format!("{value:.2} %")
}

fn format_signed_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    // -0.004 rounds to 0.00 and must not keep its sign
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
