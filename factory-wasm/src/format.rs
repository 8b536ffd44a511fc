use chrono::{DateTime, Local, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

pub fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// Schedule times come either from the default (RFC 3339, UTC) or from a
/// `datetime-local` input, which has no zone and no seconds. Anything else
/// is shown as stored.
pub fn schedule_time(raw: &str) -> String {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return local_time(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map(|at| at.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
