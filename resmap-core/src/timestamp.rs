use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DATE_TIME_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

fn format_with(seconds: Option<f64>, format: &[FormatItem]) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return String::new();
    };
    #[allow(clippy::cast_possible_truncation)]
    let seconds = seconds.floor() as i64;
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_default()
}

/// Formats seconds since the epoch (UTC).
///
/// Missing or unrepresentable timestamps are rendered as an empty string.
#[must_use]
pub fn format_unix_seconds(seconds: Option<f64>) -> String {
    format_with(seconds, DATE_TIME_FORMAT)
}

/// The (UTC) day of a timestamp in the format of event dates.
#[must_use]
pub fn format_unix_date(seconds: f64) -> String {
    format_with(Some(seconds), DATE_FORMAT)
}
