use crate::{
    Bucket, DistanceClock, Mode, Settings, StringTable, Template, classify, compute_phrase,
    in_words,
};

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const YEAR: i64 = 365 * DAY;

fn future() -> Settings {
    Settings {
        allow_future: true,
        ..Settings::default()
    }
}

#[test]
fn seconds_bucket_substitutes_rounded_seconds() {
    let settings = Settings {
        strings: StringTable {
            seconds: "%d seconds".into(),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    #[track_caller]
    fn case(settings: &Settings, d: i64, expected: &str) {
        assert_eq!(compute_phrase(d, settings), expected, "d = {d}");
    }

    case(&settings, 0, "0 seconds ago");
    case(&settings, 1, "0 seconds ago");
    case(&settings, 499, "0 seconds ago");
    case(&settings, 500, "1 seconds ago");
    case(&settings, 1_499, "1 seconds ago");
    case(&settings, 30_000, "30 seconds ago");
    case(&settings, 44_999, "45 seconds ago");

    for d in (0..45_000).step_by(997) {
        assert_eq!(compute_phrase(d, &Settings::default()), "less than a minute ago");
    }
}

#[test]
fn bucket_edges_are_strict() {
    #[track_caller]
    fn case(d: i64, bucket: Bucket, magnitude: i64, phrase: &str) {
        let class = classify(d);
        assert_eq!((class.bucket, class.magnitude), (bucket, magnitude), "d = {d}");
        assert_eq!(compute_phrase(d, &Settings::default()), phrase, "d = {d}");
    }

    case(44_999, Bucket::Seconds, 45, "less than a minute ago");
    case(45_000, Bucket::Minute, 1, "about a minute ago");
    case(89_999, Bucket::Minute, 1, "about a minute ago");
    case(90_000, Bucket::Minutes, 2, "2 minutes ago");
    case(45 * MINUTE - 1, Bucket::Minutes, 45, "45 minutes ago");
    case(45 * MINUTE, Bucket::Hour, 1, "about an hour ago");
    case(90 * MINUTE - 1, Bucket::Hour, 1, "about an hour ago");
    case(90 * MINUTE, Bucket::Hours, 2, "about 2 hours ago");
    case(DAY - 1, Bucket::Hours, 24, "about 24 hours ago");
    case(DAY, Bucket::Day, 1, "a day ago");
    case(36 * HOUR - 1, Bucket::Day, 1, "a day ago");
    case(36 * HOUR, Bucket::Days, 2, "2 days ago");
    case(30 * DAY - 1, Bucket::Days, 30, "30 days ago");
    case(30 * DAY, Bucket::Month, 1, "about a month ago");
    case(60 * DAY - 1, Bucket::Month, 1, "about a month ago");
    case(60 * DAY, Bucket::Months, 2, "2 months ago");
    case(YEAR - 1, Bucket::Months, 12, "12 months ago");
    case(YEAR, Bucket::Year, 1, "about a year ago");
    case(2 * YEAR - 1, Bucket::Year, 1, "about a year ago");
    case(2 * YEAR, Bucket::Years, 2, "2 years ago");
    case(7 * YEAR + 200 * DAY, Bucket::Years, 7, "7 years ago");
}

#[test]
fn sign_is_ignored_without_allow_future() {
    let settings = Settings::default();
    assert_eq!(
        compute_phrase(-5_000, &settings),
        compute_phrase(5_000, &settings)
    );
    assert_eq!(compute_phrase(-5_000, &settings), "less than a minute ago");
}

#[test]
fn allow_future_picks_polarity() {
    let settings = future();
    assert_eq!(compute_phrase(-5_000, &settings), "less than a minute from now");
    assert_eq!(compute_phrase(5_000, &settings), "less than a minute ago");
    assert_eq!(compute_phrase(-3 * DAY, &settings), "3 days from now");
    assert_eq!(compute_phrase(-2 * YEAR, &settings), "2 years from now");
}

#[test]
fn prefixes_and_empty_parts_join_cleanly() {
    let settings = Settings {
        allow_future: true,
        strings: StringTable {
            prefix_from_now: Some("in".into()),
            suffix_from_now: None,
            suffix_ago: Some("".into()),
            prefix_ago: Some("  ".into()),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    assert_eq!(compute_phrase(-3 * DAY, &settings), "in 3 days");
    assert_eq!(compute_phrase(60 * SECOND, &settings), "about a minute");
}

#[test]
fn prefix_and_suffix_are_joined_verbatim() {
    let settings = Settings {
        strings: StringTable {
            prefix_ago: Some("[%d]".into()),
            suffix_ago: Some("ago (%d)".into()),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    assert_eq!(compute_phrase(3 * MINUTE, &settings), "[%d] 3 minutes ago (%d)");
}

#[test]
fn numbers_replace_small_magnitudes() {
    let settings = Settings {
        strings: StringTable {
            numbers: ["zero", "one", "", "three"].map(String::from).to_vec(),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    assert_eq!(compute_phrase(3 * MINUTE, &settings), "three minutes ago");
    // empty words fall back to the digit
    assert_eq!(compute_phrase(2 * MINUTE, &settings), "2 minutes ago");
    // out of range
    assert_eq!(compute_phrase(5 * MINUTE, &settings), "5 minutes ago");
}

#[test]
fn placeholder_is_case_insensitive_and_replaced_once() {
    let settings = Settings {
        strings: StringTable {
            minutes: "%D of %d".into(),
            hours: "about an hour or two".into(),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    assert_eq!(compute_phrase(3 * MINUTE, &settings), "3 of %d ago");
    assert_eq!(compute_phrase(3 * HOUR, &settings), "about an hour or two ago");
}

#[test]
fn dynamic_templates_see_magnitude_and_signed_distance() {
    let settings = Settings {
        allow_future: true,
        strings: StringTable {
            seconds: Template::dynamic(|n, d| format!("{n}s [{d}]")),
            minutes: Template::dynamic(|n, _| {
                let template = if n == 1 { "%d minute" } else { "%d minutes" };
                template.to_string()
            }),
            ..StringTable::default()
        },
        ..Settings::default()
    };

    assert_eq!(compute_phrase(-5_000, &settings), "5s [-5000] from now");
    assert_eq!(compute_phrase(5_000, &settings), "5s [5000] ago");
    assert_eq!(compute_phrase(10 * MINUTE, &settings), "10 minutes ago");
}

#[test]
fn distance_clock_components() {
    let clock = DistanceClock::from_seconds(3661);
    assert_eq!(clock.components(), ["1", "01", "01"]);
    assert_eq!(clock.countdown(), "-1:01:01");
    assert_eq!(clock.countup(), "+1:01:01");

    assert_eq!(DistanceClock::from_seconds(0).to_string(), "0:00:00");
    assert_eq!(DistanceClock::from_seconds(59).to_string(), "0:00:59");
    assert_eq!(DistanceClock::from_seconds(-36_000).to_string(), "10:00:00");
    assert_eq!(DistanceClock::from_seconds(100 * 3600 + 9).to_string(), "100:00:09");
}

#[test]
fn countdown_and_countup_modes() {
    let countdown = Settings {
        countdown_cutoff: Some(7200.0),
        ..Settings::default()
    };
    let countup = Settings {
        countup_cutoff: Some(7200.0),
        ..Settings::default()
    };

    assert_eq!(compute_phrase(-3_661_000, &countdown), "-1:01:01");
    assert_eq!(compute_phrase(3_661_000, &countup), "+1:01:01");

    // wrong side of zero falls through to words
    assert_eq!(Mode::select(3_661_000, &countdown), Mode::Words);
    assert_eq!(Mode::select(-3_661_000, &countup), Mode::Words);
    assert_eq!(compute_phrase(3_661_000, &countdown), "about an hour ago");
}

#[test]
fn cutoffs_are_strict_and_use_truncated_seconds() {
    let settings = Settings {
        allow_future: true,
        countdown_cutoff: Some(60.0),
        countup_cutoff: Some(60.0),
        ..Settings::default()
    };

    assert_eq!(compute_phrase(-59_999, &settings), "-0:00:59");
    assert_eq!(compute_phrase(-60_000, &settings), "about a minute from now");
    assert_eq!(compute_phrase(59_999, &settings), "+0:00:59");
    assert_eq!(compute_phrase(60_000, &settings), "about a minute ago");

    // -999ms truncates to zero seconds, where both modes apply
    assert_eq!(Mode::select(-999, &settings), Mode::Countdown);
    assert_eq!(Mode::select(999, &settings), Mode::Countdown);
    assert_eq!(Mode::select(1_000, &settings), Mode::Countup);
}

#[test]
fn rendering_is_total() {
    for settings in [Settings::default(), future()] {
        for d in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            let phrase = compute_phrase(d, &settings);
            assert!(!phrase.is_empty(), "d = {d}");
        }
    }
    assert_eq!(in_words(i64::MAX, &Settings::default()), "292471208 years ago");
}
