use crate::{Result, Settings, TimeSource, Timestamp, compute_phrase, parse_timestamp};

/// Renders `timestamp` relative to the current time of `clock`.
///
/// ```
/// use fuzzytime::{ManualClock, Settings, Timestamp, time_ago};
///
/// let clock = ManualClock::new(10 * 60_000);
/// let ts = Timestamp::from_millis(0);
/// assert_eq!(time_ago(ts, &Settings::default(), &clock), "10 minutes ago");
/// ```
pub fn time_ago(timestamp: Timestamp, settings: &Settings, clock: &impl TimeSource) -> String {
    compute_phrase(timestamp.distance_from(clock), settings)
}

/// Parses `input` and renders it relative to the current time of `clock`.
///
/// # Errors
///
/// Returns [`Error::ParseFailure`] if `input` is not a recognizable
/// timestamp.
///
/// [`Error::ParseFailure`]: crate::Error::ParseFailure
pub fn time_ago_str(input: &str, settings: &Settings, clock: &impl TimeSource) -> Result<String> {
    parse_timestamp(input).map(|ts| time_ago(ts, settings, clock))
}
