//! Time source for reservation ids and creation stamps.

use chrono::{DateTime, Utc};

/// Supplies the current instant to the store.
pub trait Clock {
    /// Returns the current UTC instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use roombook::store::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 14, 12, 0, 0).unwrap();
/// assert_eq!(FixedClock::new(instant).now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always returns `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
