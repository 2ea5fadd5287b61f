//! Value coercion for loosely-typed dataset columns.
//!
//! The course dataset mixes numbers with sentinel strings ("Free", "TRUE")
//! and currency-formatted prices. Every helper here is total: bad input
//! degrades to a safe default instead of failing the load.

use chrono::NaiveDate;

/// Sentinel price values that mean "no charge".
const FREE_SENTINELS: &[&str] = &["TRUE", "Free"];

/// Coerce a raw price cell to a number.
///
/// Sentinels are replaced with `0`, every character other than ASCII digits
/// and `.` is stripped (currency symbols, thousands separators, signs), and
/// whatever remains is parsed. Anything unparseable becomes `0.0`.
pub fn coerce_price(raw: &str) -> f64 {
    let mut text = raw.to_string();
    for sentinel in FREE_SENTINELS {
        text = text.replace(sentinel, "0");
    }

    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Coerce a raw subscriber-count cell to a non-negative integer.
///
/// Accepts plain integers and float-formatted integers ("150.0").
/// Negative, non-finite, or unparseable values become 0.
pub fn coerce_subscribers(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
        _ => 0,
    }
}

/// Extract the calendar date from a published timestamp.
///
/// Expects ISO-8601-like input such as `2017-03-15T00:00:00Z`; only the part
/// before `T` is parsed, as `%Y-%m-%d`. Returns `None` when that fails.
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or_default().trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
