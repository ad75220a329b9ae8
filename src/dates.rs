//! Heterogeneous weigh-date normalization.
//!
//! Spreadsheet exports carry dates as serial day counts, day-first strings
//! with one- or two-digit fields, or ISO text. Everything funnels through
//! [`normalize_date`], which returns `None` for anything unparseable —
//! a bad date is an expected outcome, not an error.

use chrono::{DateTime, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Day/month/year with 1-2 digit day and month, 2-4 digit year, `/` or `-`.
static DMY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").unwrap());

/// Textual formats tried by the generic fallback, in order.
static GENERIC_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Converts a raw date value into a calendar date, or `None` on failure.
///
/// Tried in order, first success wins:
/// 1. null/empty/non-scalar input fails;
/// 2. a purely numeric string longer than 4 characters is a spreadsheet
///    serial day count (see [`serial_to_date`]);
/// 3. a day-month-year string, two-digit years meaning 20xx;
/// 4. generic `%Y-%m-%d` / `%Y/%m/%d` / RFC 3339 parsing.
///
/// No timezone handling: every value is a local calendar date at midnight.
pub fn normalize_date(value: &Value) -> Option<NaiveDate> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        _ => return None,
    };

    if text.is_empty() {
        return None;
    }

    if text.len() > 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return serial_to_date(text.parse().ok()?);
    }

    if let Some(caps) = DMY_RE.captures(&text) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;
        if year < 100 {
            year += 2000;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        // Impossible combinations (31/02/…) fall through to the generic parse.
    }

    for fmt in GENERIC_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&text, fmt) {
            return Some(date);
        }
    }

    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Maps a spreadsheet serial day count to a calendar date.
///
/// Epoch day 1 is 1900-01-01, with a two-day correction: spreadsheet engines
/// count the nonexistent 1900-02-29, and one more day is lost aligning the
/// epoch. The constant is kept as-is so output stays identical to the
/// historical reference tool.
pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    epoch.checked_add_signed(Duration::days(serial - 2))
}
