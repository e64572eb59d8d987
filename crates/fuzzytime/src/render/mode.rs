use crate::{DistanceClock, Settings, in_words};

/// How a refresh renders its distance.
///
/// Countdown is checked before countup. The two only overlap at a distance
/// of zero seconds with both cutoffs configured, and the countdown wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `-H:MM:SS`: the target is less than `countdown_cutoff` seconds away.
    Countdown,
    /// `+H:MM:SS`: the target passed less than `countup_cutoff` seconds ago.
    Countup,
    /// A phrase such as "about an hour ago".
    Words,
}

impl Mode {
    pub fn select(distance_millis: i64, settings: &Settings) -> Self {
        let secs = distance_seconds(distance_millis);
        if should_countdown(secs, settings.countdown_cutoff) {
            Self::Countdown
        } else if should_countup(secs, settings.countup_cutoff) {
            Self::Countup
        } else {
            Self::Words
        }
    }
}

/// Whole seconds in `distance_millis`, truncated toward zero.
#[inline]
pub const fn distance_seconds(distance_millis: i64) -> i64 {
    distance_millis / 1000
}

fn should_countdown(secs: i64, cutoff: Option<f64>) -> bool {
    cutoff.is_some_and(|cutoff| secs <= 0 && (secs.unsigned_abs() as f64) < cutoff)
}

fn should_countup(secs: i64, cutoff: Option<f64>) -> bool {
    cutoff.is_some_and(|cutoff| secs >= 0 && (secs as f64) < cutoff)
}

/// Renders a distance with whichever [`Mode`] the settings select.
///
/// This is a total function: every `i64` distance renders to a string.
///
/// # Example
///
/// ```
/// use fuzzytime::{Settings, compute_phrase};
///
/// let settings = Settings::default();
/// assert_eq!(compute_phrase(60_000, &settings), "about a minute ago");
///
/// let settings = Settings {
///     countdown_cutoff: Some(7200.0),
///     ..Settings::default()
/// };
/// assert_eq!(compute_phrase(-3_661_000, &settings), "-1:01:01");
/// ```
pub fn compute_phrase(distance_millis: i64, settings: &Settings) -> String {
    match Mode::select(distance_millis, settings) {
        Mode::Countdown => DistanceClock::from_seconds(distance_seconds(distance_millis)).countdown(),
        Mode::Countup => DistanceClock::from_seconds(distance_seconds(distance_millis)).countup(),
        Mode::Words => in_words(distance_millis, settings),
    }
}
