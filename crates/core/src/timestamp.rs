//! Timestamp normalisation and parsing.
//!
//! Form inputs arrive as `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm` or `YYYY/MM/DD - hh:mm`. They
//! are normalised to the `T`-separated shape before parsing.

use crate::constants::TIMESTAMP_FORMATS;
use chrono::NaiveDateTime;

/// Normalise the textual separator variants into `YYYY-MM-DDThh:mm`.
///
/// All `/` become `-`. The first whitespace run, together with a `-` it surrounds, becomes a
/// single `T`. Later separators are left alone.
pub fn normalize_timestamp(text: &str) -> String {
    let text = text.trim().replace('/', "-");

    let Some(start) = text.find(char::is_whitespace) else {
        return text;
    };

    let rest = text[start..].trim_start();
    let rest = match rest.strip_prefix('-') {
        Some(after_dash) => after_dash.trim_start(),
        None => rest,
    };

    format!("{}T{}", &text[..start], rest)
}

/// Parse a form timestamp, or `None` when it is not a calendar date-time after normalisation.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_timestamp(text);
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

/// Elapsed hours from `birth` to `measurement` as a real number.
pub fn hours_between(birth: NaiveDateTime, measurement: NaiveDateTime) -> f64 {
    let elapsed = measurement - birth;
    elapsed.num_milliseconds() as f64 / 3_600_000.0
}
