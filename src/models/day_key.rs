use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Canonical (year, month, day) bucket key for one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayKey {
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> AppResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(DayKey::from)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
