use core::fmt;

/// An absolute duration split into clock components.
///
/// Hours are unbounded and unpadded; minutes and seconds are always two
/// digits. The sign of the input is discarded.
///
/// ```
/// use fuzzytime::DistanceClock;
///
/// let clock = DistanceClock::from_seconds(-3661);
/// assert_eq!(clock.to_string(), "1:01:01");
/// assert_eq!(DistanceClock::from_seconds(90_000).to_string(), "25:00:00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceClock {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl DistanceClock {
    pub fn from_seconds(distance_seconds: i64) -> Self {
        let rem = distance_seconds.unsigned_abs();
        Self {
            hours: rem / 3600,
            minutes: ((rem % 3600) / 60) as u8,
            seconds: (rem % 60) as u8,
        }
    }

    /// The formatted `[hours, minutes, seconds]` components.
    pub fn components(&self) -> [String; 3] {
        [
            self.hours.to_string(),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }

    /// `-H:MM:SS`, for targets in the future.
    pub fn countdown(&self) -> String {
        format!("-{self}")
    }

    /// `+H:MM:SS`, for targets in the past.
    pub fn countup(&self) -> String {
        format!("+{self}")
    }
}

impl fmt::Display for DistanceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
