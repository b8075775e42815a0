use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A calendar month, text form `YYYY-MM`. Used as the store fetch key and to
/// tell whether a fetch response still matches the selected month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonthKey(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        let (y, m) = t
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonthKey(s.to_string()))?;
        if y.len() != 4 || m.len() != 2 {
            return Err(AppError::InvalidMonthKey(s.to_string()));
        }
        let year: i32 = y.parse().map_err(|_| AppError::InvalidMonthKey(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| AppError::InvalidMonthKey(s.to_string()))?;
        Self::new(year, month).map_err(|_| AppError::InvalidMonthKey(s.to_string()))
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month; the last representable month is its own successor.
    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    /// The preceding month; the first representable month is its own predecessor.
    pub fn prev(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
