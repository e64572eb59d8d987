use crate::{Settings, StringTable, Template, classify};
use std::borrow::Cow;

/// Renders a distance as words, ignoring countdown/countup modes.
///
/// `distance_millis` is `now - target`: positive for the past, negative for
/// the future. With [`Settings::allow_future`] set, negative distances use
/// the "from now" prefix/suffix and are classified by absolute value.
/// Without it, the "ago" pair is always used and the distance is classified
/// as-is.
///
/// Use [`compute_phrase`] to get the full, mode-selected rendering.
///
/// [`compute_phrase`]: crate::compute_phrase
pub fn in_words(distance_millis: i64, settings: &Settings) -> String {
    let strings = &settings.strings;
    let (prefix, suffix, distance) = if settings.allow_future && distance_millis < 0 {
        (
            &strings.prefix_from_now,
            &strings.suffix_from_now,
            distance_millis.saturating_abs(),
        )
    } else {
        (&strings.prefix_ago, &strings.suffix_ago, distance_millis)
    };

    let class = classify(distance);
    let magnitude = class.magnitude;
    let words = substitute(class.bucket.template(strings), magnitude, distance_millis, strings);
    // only the bucket phrase gets `%d` substitution
    let prefix = prefix.as_ref().map(|t| t.resolve(magnitude, distance_millis));
    let suffix = suffix.as_ref().map(|t| t.resolve(magnitude, distance_millis));

    join_parts([prefix.as_deref(), Some(words.as_str()), suffix.as_deref()])
}

/// Resolves `template` and replaces its first `%d` (case-insensitive) with
/// the magnitude, or with its spelled-out form from `strings.numbers`.
pub(crate) fn substitute(
    template: &Template,
    magnitude: i64,
    distance_millis: i64,
    strings: &StringTable,
) -> String {
    let raw = template.resolve(magnitude, distance_millis);
    let Some(at) = find_placeholder(&raw) else {
        return raw.into_owned();
    };

    let value = match strings.number(magnitude) {
        Some(word) => Cow::Borrowed(word),
        None => Cow::Owned(magnitude.to_string()),
    };
    let mut out = String::with_capacity(raw.len() + value.len());
    out.push_str(&raw[..at]);
    out.push_str(&value);
    out.push_str(&raw[at + 2..]);
    out
}

fn find_placeholder(s: &str) -> Option<usize> {
    s.as_bytes()
        .windows(2)
        .position(|w| w[0] == b'%' && w[1].eq_ignore_ascii_case(&b'd'))
}

fn join_parts<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let parts: Vec<&str> = parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();
    parts.join(" ").trim().to_string()
}
