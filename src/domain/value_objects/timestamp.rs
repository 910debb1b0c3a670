//! Archive timestamp labels (`YYYYmmddHHMMSS`)

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn timestamp_label(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a 14-digit label back into a timestamp.
pub fn parse_timestamp_label(label: &str) -> Option<NaiveDateTime> {
    if label.len() != 14 || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(label, TIMESTAMP_FORMAT).ok()
}
