use super::parse::normalize;
use crate::{Error, ManualClock, Timestamp, parse_timestamp};

// 2021-06-01T12:00:00Z
const NOON_UTC: i64 = 1_622_548_800_000;

#[test]
fn normalizes_iso8601_for_the_generic_parser() {
    #[track_caller]
    fn case(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    case("2021-06-01T12:00:00Z", "2021/06/01 12:00:00 UTC");
    case("  2021-06-01T12:00:00.123Z ", "2021/06/01 12:00:00 UTC");
    case("2021-06-01T12:00:00+05:30", "2021/06/01 12:00:00 +0530");
    case("2021-06-01T12:00:00-0400", "2021/06/01 12:00:00 -0400");
    case("2021-06-01", "2021/06/01");
}

#[test]
fn parses_utc() {
    let ts = parse_timestamp("2021-06-01T12:00:00Z").unwrap();
    assert_eq!(ts.as_millis(), NOON_UTC);
}

#[test]
fn fractional_seconds_are_truncated() {
    assert_eq!(
        parse_timestamp("2021-06-01T12:00:00.123Z").unwrap(),
        parse_timestamp("2021-06-01T12:00:00Z").unwrap(),
    );
    assert_eq!(
        parse_timestamp("2021-06-01T12:00:00.999999Z").unwrap(),
        parse_timestamp("2021-06-01T12:00:00Z").unwrap(),
    );
}

#[test]
fn offsets_are_applied() {
    #[track_caller]
    fn case(input: &str) {
        assert_eq!(parse_timestamp(input).unwrap().as_millis(), NOON_UTC, "{input}");
    }

    case("2021-06-01T17:30:00+05:30");
    case("2021-06-01T17:30:00+0530");
    case("2021-06-01T08:00:00-04:00");
    case("2021-06-01T08:00:00-0400");
}

#[test]
fn looser_shapes_parse() {
    assert_eq!(
        parse_timestamp("2021-06-01 12:00:00").unwrap().as_millis(),
        NOON_UTC
    );
    assert_eq!(
        parse_timestamp("2021-06-01T12:00Z").unwrap().as_millis(),
        NOON_UTC
    );
    assert_eq!(
        parse_timestamp("2021-06-01").unwrap().as_millis(),
        NOON_UTC - 12 * 3_600_000
    );
}

#[test]
fn malformed_input_is_a_parse_failure() {
    for input in ["", "   ", "not a date", "2021-13-01T00:00:00Z", "2021-06-01T25:00:00Z"] {
        assert_eq!(
            parse_timestamp(input),
            Err(Error::ParseFailure {
                input: input.trim().to_string()
            }),
            "{input:?}"
        );
    }
}

#[test]
fn from_str_and_display() {
    let ts: Timestamp = "2021-06-01T12:00:00Z".parse().unwrap();
    assert_eq!(ts.to_string(), "2021-06-01T12:00:00.000Z");
    assert_eq!(ts.to_string().parse::<Timestamp>().unwrap(), ts);
}

#[test]
fn distance_is_positive_for_the_past() {
    let ts = Timestamp::from_millis(NOON_UTC);
    let clock = ManualClock::new(NOON_UTC + 90_000);
    assert_eq!(ts.distance_from(&clock), 90_000);

    clock.set(NOON_UTC - 5_000);
    assert_eq!(ts.distance_from(&clock), -5_000);
}
