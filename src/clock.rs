//! Time source for the time-based convenience checks
//!
//! [`DecodedToken::expired`](crate::DecodedToken::expired) reads the system
//! clock. Tests and callers that need deterministic results pass their own
//! [`Clock`] to the `*_with` variants instead.

use chrono::{DateTime, Utc};

/// A source of the current instant
pub trait Clock {
    /// The current point in time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at a Unix timestamp in seconds
    ///
    /// Returns `None` if the timestamp is outside the range `chrono` supports.
    pub fn at_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
