//! UTC instant, the portable storage representation.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use std::fmt;

/// A point on the UTC timeline, normalized to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Build an instant from a UTC datetime. Seconds and fractions are dropped.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        let trimmed = dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt);
        Self(trimmed)
    }

    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Minutes elapsed from `self` to `later` (negative if `later` is earlier).
    pub fn minutes_until(&self, later: &Instant) -> i64 {
        (later.0 - self.0).num_minutes()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
