use chrono::{DateTime, Utc};

/// Calendar date shown next to enrollments, e.g. `2023-11-14`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}
