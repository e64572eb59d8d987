use crate::StringTable;
use core::time::Duration;

/// Default refresh interval: once a minute.
pub const DEFAULT_REFRESH_MILLIS: u64 = 60_000;

/// Rendering and refresh configuration.
///
/// A `Settings` value is a snapshot: the [`Scheduler`] stores one per
/// registered target and never mutates it. Defaults match the classic
/// behavior (refresh every minute, past-only phrases, no clocks, no
/// threshold events); override fields with struct update syntax.
///
/// # Example
///
/// ```
/// use fuzzytime::Settings;
///
/// let settings = Settings {
///     allow_future: true,
///     countdown_cutoff: Some(3600.0),
///     ..Settings::default()
/// };
/// assert_eq!(settings.refresh_millis, 60_000);
/// assert_eq!(settings.thresholds, [0.0]);
/// ```
///
/// [`Scheduler`]: crate::Scheduler
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Settings {
    /// Milliseconds between refreshes of a target. `0` disables automatic
    /// refresh; targets are rendered once at registration.
    pub refresh_millis: u64,

    /// Render future timestamps as "… from now". When `false`, every
    /// distance uses the "ago" prefix/suffix and its sign is left as-is.
    pub allow_future: bool,

    /// Render a `-H:MM:SS` countdown while the target is less than this many
    /// seconds in the future. `None` disables the countdown; serialized
    /// documents may also disable it with `false`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_cutoff"))]
    pub countdown_cutoff: Option<f64>,

    /// Render a `+H:MM:SS` countup while the target is less than this many
    /// seconds in the past. `None` disables the countup; serialized
    /// documents may also disable it with `false`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_cutoff"))]
    pub countup_cutoff: Option<f64>,

    /// Emit threshold notifications on refresh.
    pub fire_thresholds: bool,

    /// Distances, in seconds, that trigger a notification when a refresh
    /// crosses them. Checked in order.
    pub thresholds: Vec<f64>,

    pub strings: StringTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_millis: DEFAULT_REFRESH_MILLIS,
            allow_future: false,
            countdown_cutoff: None,
            countup_cutoff: None,
            fire_thresholds: false,
            thresholds: vec![0.0],
            strings: StringTable::default(),
        }
    }
}

impl Settings {
    /// The refresh interval, or `None` when automatic refresh is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_millis > 0).then(|| Duration::from_millis(self.refresh_millis))
    }
}

/// Accepts a number of seconds, `null` or `false`.
#[cfg(feature = "serde")]
fn deserialize_cutoff<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{Deserialize, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cutoff {
        Seconds(f64),
        Enabled(bool),
    }

    match Option::<Cutoff>::deserialize(d)? {
        Some(Cutoff::Seconds(seconds)) => Ok(Some(seconds)),
        None | Some(Cutoff::Enabled(false)) => Ok(None),
        Some(Cutoff::Enabled(true)) => Err(D::Error::custom(
            "a cutoff must be a number of seconds, `false` or `null`",
        )),
    }
}
