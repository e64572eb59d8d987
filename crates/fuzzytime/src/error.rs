/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `fuzzytime` can emit.
///
/// Neither variant is fatal. The [`Scheduler`] swallows both and skips the
/// affected entry, which ends that entry's refresh chain. They only surface
/// to callers through the standalone parsing helpers.
///
/// [`Scheduler`]: crate::Scheduler
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The timestamp string was missing or could not be parsed.
    ///
    /// A missing timestamp is reported with an empty `input`.
    #[error("failed to parse timestamp: {input:?}")]
    ParseFailure { input: String },

    /// The source can no longer produce data for a registered target, e.g.
    /// the underlying element was removed by the host.
    #[error("target can no longer be resolved from its source")]
    UnresolvableSource,
}

impl Error {
    pub(crate) fn parse_failure(input: impl Into<String>) -> Self {
        Self::ParseFailure {
            input: input.into(),
        }
    }
}
