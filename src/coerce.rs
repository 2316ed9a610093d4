//! Lenient coercion of loosely-typed form input.
//!
//! The API accepts whatever the client sends and coerces it rather than
//! rejecting: a value that fails to parse becomes `None`, and the caller
//! decides what the absence means (a null duration, a dropped date bound,
//! an uncapped log).

use chrono::NaiveDate;

/// Coerce a calendar date in `YYYY-MM-DD` form. Empty or malformed input
/// coerces to `None`.
pub fn date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Coerce a duration in minutes. Non-numeric input coerces to `None`, the
/// "not a number" sentinel stored and served as null.
pub fn duration(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Coerce a result cap. Only a strictly positive integer caps the log;
/// anything else means "no cap".
pub fn limit(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|n| *n > 0)
}
