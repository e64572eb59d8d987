use crate::{StringTable, Template};

/// One of the eleven magnitude buckets a distance falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Bucket {
    /// The template this bucket renders with.
    pub fn template(self, strings: &StringTable) -> &Template {
        match self {
            Self::Seconds => &strings.seconds,
            Self::Minute => &strings.minute,
            Self::Minutes => &strings.minutes,
            Self::Hour => &strings.hour,
            Self::Hours => &strings.hours,
            Self::Day => &strings.day,
            Self::Days => &strings.days,
            Self::Month => &strings.month,
            Self::Months => &strings.months,
            Self::Year => &strings.year,
            Self::Years => &strings.years,
        }
    }
}

/// A classified distance: the bucket plus the magnitude substituted for `%d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub bucket: Bucket,
    pub magnitude: i64,
}

/// Picks the bucket for a distance in milliseconds.
///
/// Every bound is strict (`<`), and the first matching bucket wins:
///
/// | condition       | bucket    | magnitude           |
/// |-----------------|-----------|---------------------|
/// | seconds < 45    | `Seconds` | round(seconds)      |
/// | seconds < 90    | `Minute`  | 1                   |
/// | minutes < 45    | `Minutes` | round(minutes)      |
/// | minutes < 90    | `Hour`    | 1                   |
/// | hours < 24      | `Hours`   | round(hours)        |
/// | hours < 36      | `Day`     | 1                   |
/// | days < 30       | `Days`    | round(days)         |
/// | days < 60       | `Month`   | 1                   |
/// | days < 365      | `Months`  | floor(days / 30)    |
/// | years < 2       | `Year`    | 1                   |
/// | otherwise       | `Years`   | floor(years)        |
///
/// Rounding is half-up. The classifier does not look at the sign; negative
/// distances land in `Seconds` with a negative magnitude, so callers that
/// want polarity take the absolute value first.
pub fn classify(distance_millis: i64) -> Classification {
    let seconds = distance_millis as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    let (bucket, magnitude) = if seconds < 45.0 {
        (Bucket::Seconds, round_half_up(seconds))
    } else if seconds < 90.0 {
        (Bucket::Minute, 1.0)
    } else if minutes < 45.0 {
        (Bucket::Minutes, round_half_up(minutes))
    } else if minutes < 90.0 {
        (Bucket::Hour, 1.0)
    } else if hours < 24.0 {
        (Bucket::Hours, round_half_up(hours))
    } else if hours < 36.0 {
        (Bucket::Day, 1.0)
    } else if days < 30.0 {
        (Bucket::Days, round_half_up(days))
    } else if days < 60.0 {
        (Bucket::Month, 1.0)
    } else if days < 365.0 {
        (Bucket::Months, (days / 30.0).floor())
    } else if years < 2.0 {
        (Bucket::Year, 1.0)
    } else {
        (Bucket::Years, years.floor())
    };

    Classification {
        bucket,
        magnitude: magnitude as i64,
    }
}

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
