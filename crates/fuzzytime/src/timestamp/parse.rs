use crate::{Error, Result, Timestamp};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static FRACTIONAL_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]+").expect("valid fractional seconds pattern"));

static TRAILING_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([+-][0-9]{2}):?([0-9]{2})$").expect("valid trailing offset pattern")
});

const DATE_TIME_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];
const DATE_FORMAT: &str = "%Y/%m/%d";

/// Parses an ISO-8601-like timestamp into an absolute [`Timestamp`].
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.fff][Z|±HH:MM|±HHMM]` and the looser shapes
/// a generic date parser would: a space instead of `T`, missing seconds, or
/// a bare date (midnight). Fractional seconds are dropped, so the result is
/// truncated to whole seconds. Input without an offset is read as UTC.
///
/// # Errors
///
/// Returns [`Error::ParseFailure`] when the string is empty or does not
/// describe a valid date and time.
///
/// # Example
///
/// ```
/// use fuzzytime::parse_timestamp;
///
/// let a = parse_timestamp("2021-06-01T12:00:00.123Z").unwrap();
/// let b = parse_timestamp("2021-06-01T14:00:00+02:00").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_timestamp("yesterday-ish").is_err());
/// ```
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let normalized = normalize(input);
    parse_normalized(&normalized)
        .map(Timestamp::from_millis)
        .ok_or_else(|| Error::parse_failure(input.trim()))
}

/// Rewrites ISO-8601 into the `YYYY/MM/DD HH:MM:SS ±HHMM` shape the generic
/// parser understands.
pub(crate) fn normalize(input: &str) -> String {
    let s = input.trim();
    let s = FRACTIONAL_SECONDS.replace(s, "");
    let s = s.replacen('-', "/", 2);
    let s = s.replacen('T', " ", 1).replacen('Z', " UTC", 1);
    TRAILING_OFFSET.replace(&s, " ${1}${2}").into_owned()
}

fn parse_normalized(s: &str) -> Option<i64> {
    let (local, offset_secs) = split_zone(s.trim())?;
    let naive = parse_naive(local)?;
    let offset = FixedOffset::east_opt(offset_secs)?;
    let dt = naive.and_local_timezone(offset).single()?;
    Some(dt.timestamp_millis())
}

/// Splits a trailing ` UTC` or ` ±HHMM` zone off the local date-time.
/// Returns the offset east of UTC in seconds.
fn split_zone(s: &str) -> Option<(&str, i32)> {
    if let Some(local) = s.strip_suffix("UTC") {
        return Some((local.trim_end(), 0));
    }

    let Some((local, zone)) = s.rsplit_once(' ') else {
        return Some((s, 0));
    };

    let bytes = zone.as_bytes();
    let is_offset = bytes.len() == 5
        && matches!(bytes[0], b'+' | b'-')
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if !is_offset {
        return Some((s, 0));
    }

    let hours: i32 = zone[1..3].parse().ok()?;
    let minutes: i32 = zone[3..5].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let secs = hours * 3600 + minutes * 60;
    let secs = if bytes[0] == b'-' { -secs } else { secs };
    Some((local.trim_end(), secs))
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
