use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Schemes a stored locator may use when it ends up in `src` or `href`.
const RENDERABLE_SCHEMES: [&str; 3] = ["https:", "http:", "data:"];

/// Server timestamp layouts seen from the content functions.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Embed file contents into a `data:` locator.
pub fn data_locator(content_type: &str, bytes: &[u8]) -> String {
    let content_type = match content_type.trim() {
        "" => FALLBACK_CONTENT_TYPE,
        content_type => content_type,
    };
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

/// The locator, trimmed, when it is a web or embedded-data locator.
pub fn renderable_locator(locator: &str) -> Option<&str> {
    let locator = locator.trim();
    RENDERABLE_SCHEMES
        .iter()
        .any(|scheme| {
            locator
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
        .then_some(locator)
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(datetime.date_naive());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok())
}

/// Format a server timestamp as a long date, e.g. "March 1, 2025".
pub fn format_date(timestamp: &str) -> Option<String> {
    parse_timestamp(timestamp).map(|date| date.format("%B %-d, %Y").to_string())
}
