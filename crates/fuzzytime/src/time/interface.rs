use std::{rc::Rc, sync::Arc};

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. Every distance the crate computes is `now - target`,
/// so the unit is **milliseconds since the UNIX epoch**, the same unit
/// [`Timestamp`] uses.
///
/// # Example
///
/// ```
/// use fuzzytime::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
///
/// [`Timestamp`]: crate::Timestamp
pub trait TimeSource {
    /// Returns the current time in milliseconds since the UNIX epoch.
    fn current_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}
