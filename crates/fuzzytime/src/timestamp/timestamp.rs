use crate::{Error, Result, TimeSource, parse_timestamp};
use chrono::{DateTime, SecondsFormat, Utc};
use core::{fmt, str::FromStr};

/// An absolute point in time, in milliseconds since the UNIX epoch.
///
/// This is the value the timestamp parser produces and the refresh loop
/// measures distances against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since 1970-01-01 UTC.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since 1970-01-01 UTC.
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Signed distance from this timestamp to `now`, in milliseconds.
    ///
    /// Positive values mean the timestamp is in the past.
    pub fn distance_from(self, now: &impl TimeSource) -> i64 {
        now.current_millis().saturating_sub(self.0)
    }

    /// Converts into a [`chrono`] UTC date-time, if representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_timestamp(s)
    }
}

impl fmt::Display for Timestamp {
    /// Formats as RFC 3339 in UTC with millisecond precision, falling back
    /// to the raw millisecond count outside chrono's range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}
