//! Date formatting helpers.

use chrono::{DateTime, Utc};

/// Format a datetime to DD.MM.YYYY, the display format used for the order
/// date.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}
