use std::{borrow::Cow, fmt, sync::Arc};

/// Signature of a [`Template::Dynamic`] callback: `(magnitude,
/// distance_millis) -> template`.
pub type TemplateFn = dyn Fn(i64, i64) -> String + Send + Sync;

/// A phrase template, optionally containing a `%d` placeholder.
///
/// Literal templates are used as-is. Dynamic templates are called with the
/// bucket magnitude and the signed distance in milliseconds, which lets a
/// string table pick grammatical forms (e.g., plural rules) at render time.
/// Either way, the first case-insensitive `%d` in the result is replaced
/// with the magnitude.
///
/// # Example
///
/// ```
/// use fuzzytime::Template;
///
/// let plural = Template::dynamic(|n, _| {
///     if n == 1 { "%d minute".into() } else { "%d minutes".into() }
/// });
/// assert_eq!(plural.resolve(1, 60_000), "%d minute");
/// assert_eq!(Template::from("%d days").resolve(3, 0), "%d days");
/// ```
#[derive(Clone)]
pub enum Template {
    /// A fixed template string.
    Literal(Cow<'static, str>),
    /// A template computed from `(magnitude, distance_millis)`.
    Dynamic(Arc<TemplateFn>),
}

impl Template {
    pub fn literal(template: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(template.into())
    }

    pub fn dynamic(f: impl Fn(i64, i64) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Produces the raw template for a magnitude, before `%d` substitution.
    pub fn resolve(&self, magnitude: i64, distance_millis: i64) -> Cow<'_, str> {
        match self {
            Self::Literal(s) => Cow::Borrowed(s),
            Self::Dynamic(f) => Cow::Owned(f(magnitude, distance_millis)),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&'static str> for Template {
    fn from(s: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(s))
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self::Literal(Cow::Owned(s))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(d).map(Self::from)
    }
}

/// The phrases used by the renderer, keyed by bucket.
///
/// Prefixes and suffixes are optional and are joined verbatim, without `%d`
/// substitution. A missing or empty one adds no whitespace to the final
/// phrase. `numbers` spells out small magnitudes:
/// when `numbers[n]` exists and is non-empty it is substituted for `%d`
/// instead of `n`.
///
/// Override individual fields with struct update syntax:
///
/// ```
/// use fuzzytime::{StringTable, Template};
///
/// let strings = StringTable {
///     suffix_ago: Some("ago".into()),
///     minutes: "%d min".into(),
///     numbers: vec!["zero".into(), "one".into(), "two".into()],
///     ..StringTable::default()
/// };
/// assert!(strings.prefix_ago.is_none());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct StringTable {
    pub prefix_ago: Option<Template>,
    pub prefix_from_now: Option<Template>,
    pub suffix_ago: Option<Template>,
    pub suffix_from_now: Option<Template>,
    pub seconds: Template,
    pub minute: Template,
    pub minutes: Template,
    pub hour: Template,
    pub hours: Template,
    pub day: Template,
    pub days: Template,
    pub month: Template,
    pub months: Template,
    pub year: Template,
    pub years: Template,
    pub numbers: Vec<String>,
}

impl Default for StringTable {
    /// English phrases: "less than a minute ago", "about 3 hours from now".
    fn default() -> Self {
        Self {
            prefix_ago: None,
            prefix_from_now: None,
            suffix_ago: Some("ago".into()),
            suffix_from_now: Some("from now".into()),
            seconds: "less than a minute".into(),
            minute: "about a minute".into(),
            minutes: "%d minutes".into(),
            hour: "about an hour".into(),
            hours: "about %d hours".into(),
            day: "a day".into(),
            days: "%d days".into(),
            month: "about a month".into(),
            months: "%d months".into(),
            year: "about a year".into(),
            years: "%d years".into(),
            numbers: Vec::new(),
        }
    }
}

impl StringTable {
    /// The written-out word for `magnitude`, if one is configured.
    pub fn number(&self, magnitude: i64) -> Option<&str> {
        let index = usize::try_from(magnitude).ok()?;
        self.numbers
            .get(index)
            .map(String::as_str)
            .filter(|word| !word.is_empty())
    }
}
