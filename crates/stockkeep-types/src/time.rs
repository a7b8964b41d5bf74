use chrono::NaiveDateTime;

/// Format used for `last_updated` in storage and display (`YYYY-MM-DD HH:MM:SS`).
///
/// The format sorts lexicographically in the same order as the instants it
/// encodes, so stored stamps can be compared as plain strings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
