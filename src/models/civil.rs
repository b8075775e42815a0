//! Civil date-time in the configured zone.

use super::day_key::DayKey;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

/// Calendar fields plus hour and minute, interpreted in the single civil zone.
///
/// Always calendar-valid: the only ways in are the checked constructors and
/// conversions from chrono values, which cannot hold a Feb 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> AppResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AppError::InvalidTime(format!("{hour:02}:{minute:02}")))?;
        Ok(Self(date.and_time(time)))
    }

    /// Midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    pub fn from_date_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from_naive(date.and_time(time))
    }

    /// Wrap a naive datetime, dropping seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let trimmed = dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt);
        Self(trimmed)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
    pub fn month(&self) -> u32 {
        self.0.month()
    }
    pub fn day(&self) -> u32 {
        self.0.day()
    }
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn day_key(&self) -> DayKey {
        DayKey::from(self.date())
    }

    /// Same time-of-day on another date.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self(date.and_time(self.time()))
    }

    /// Stays put when the result would leave chrono's date range.
    pub fn plus_days(&self, days: i64) -> Self {
        self.shifted(Duration::days(days))
    }

    pub fn plus_minutes(&self, minutes: i64) -> Self {
        self.shifted(Duration::minutes(minutes))
    }

    fn shifted(&self, delta: Duration) -> Self {
        self.0.checked_add_signed(delta).map(Self).unwrap_or(*self)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}
