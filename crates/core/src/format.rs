//! Display formatting for amounts, ratios and gain classification.
//!
//! Every function here is total: `NaN` and infinities are treated as zero
//! so an invalid number never reaches user-visible text.

use crate::models::gain::{GainStatus, GainStatusInfo};

/// Currency symbol used by [`format_gain_amount_with_currency`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

fn normalize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Group the integer part of a non-negative number with commas.
fn group_thousands(value: f64) -> String {
    // `{:.0}` keeps every digit of large magnitudes; `abs` drops the sign of `-0.0`.
    let digits = format!("{:.0}", value.round().abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Apply the `+` / `-` / none sign convention around an absolute-value formatter.
///
/// Strictly positive values get `+`, strictly negative values get `-` and
/// the formatter sees `|value|`. Zero (including `-0.0`) is passed as `0.0`
/// with no sign.
pub fn format_with_sign(value: f64, formatter: impl Fn(f64) -> String) -> String {
    if value > 0.0 {
        format!("+{}", formatter(value))
    } else if value < 0.0 {
        format!("-{}", formatter(value.abs()))
    } else {
        formatter(0.0)
    }
}

/// Thousands-grouped integer, no symbol, no decimals (e.g. `"115,500"`).
///
/// Negative amounts keep a leading `-`. Non-finite input yields `"0"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded = normalize(amount).round();
    if rounded < 0.0 {
        format!("-{}", group_thousands(rounded.abs()))
    } else {
        group_thousands(rounded)
    }
}

/// Signed ratio with two decimals (e.g. `"+12.87%"`, `"-5.00%"`, `"0.00%"`).
#[must_use]
pub fn format_gain_ratio(ratio: f64) -> String {
    format_with_sign(normalize(ratio), |v| format!("{v:.2}%"))
}

/// Unsigned ratio with one decimal (e.g. `"39.8%"`).
#[must_use]
pub fn format_holding_ratio(ratio: f64) -> String {
    let normalized = normalize(ratio);
    // `-0.0` would otherwise print as "-0.0%"
    let normalized = if normalized == 0.0 { 0.0 } else { normalized };
    format!("{normalized:.1}%")
}

/// Signed grouped integer (e.g. `"+5,242"`, `"-1,520"`, `"0"`).
#[must_use]
pub fn format_gain_amount(amount: f64) -> String {
    format_with_sign(normalize(amount), group_thousands)
}

/// Signed grouped integer behind the default currency symbol
/// (e.g. `"+¥15,500"`, `"-¥3,000"`, `"¥0"`).
#[must_use]
pub fn format_gain_amount_with_currency(amount: f64) -> String {
    format_gain_amount_with_symbol(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Like [`format_gain_amount_with_currency`] with a caller-chosen symbol.
/// The sign precedes the symbol.
#[must_use]
pub fn format_gain_amount_with_symbol(amount: f64, symbol: &str) -> String {
    format_with_sign(normalize(amount), |v| format!("{symbol}{}", group_thousands(v)))
}

/// Classify a signed amount. Zero and non-finite input are `Zero`.
///
/// Only the amount decides the status; the gain ratio is never consulted,
/// even when the two disagree in sign.
#[must_use]
pub fn get_gain_status(amount: f64) -> GainStatus {
    let normalized = normalize(amount);
    if normalized > 0.0 {
        GainStatus::Positive
    } else if normalized < 0.0 {
        GainStatus::Negative
    } else {
        GainStatus::Zero
    }
}

/// [`get_gain_status`] paired with its color class.
#[must_use]
pub fn gain_status_info(amount: f64) -> GainStatusInfo {
    get_gain_status(amount).into()
}

/// Color class lookup for a status.
#[must_use]
pub fn gain_status_color(status: GainStatus) -> &'static str {
    status.color_class()
}

