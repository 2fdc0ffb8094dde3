//! Release date input parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse the release date input into epoch milliseconds
///
/// Accepts `YYYY-MM-DD` (UTC midnight), RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM[:SS]` (UTC). Returns `None` for empty or unparseable
/// input, and for the epoch itself, so the field is left out of the upload.
pub fn parse_release_date(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let millis = if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?)
            .timestamp_millis()
    } else if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        datetime.timestamp_millis()
    } else {
        let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
            .ok()?;
        Utc.from_utc_datetime(&naive).timestamp_millis()
    };

    (millis != 0).then_some(millis)
}
