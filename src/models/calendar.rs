use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One cell of a calendar grid. Recomputed on every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_period: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Month,
    Week,
    Day,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(&self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// First day of the displayed week. Fixed by configuration, never detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> chrono::Weekday {
        match self {
            WeekStart::Sunday => chrono::Weekday::Sun,
            WeekStart::Monday => chrono::Weekday::Mon,
        }
    }
}
