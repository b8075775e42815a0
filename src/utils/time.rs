//! Time utilities: parsing HH:MM.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}
