// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use chrono::NaiveDate;

/// Parse a date range expression into inclusive civil bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "'{r}': start and end must have the same format"
            )));
        }

        let (s, _) = period_bounds(start)?;
        let (_, e) = period_bounds(end)?;
        if e < s {
            return Err(AppError::InvalidDate(format!("'{r}': end precedes start")));
        }
        Ok((s, e))
    } else {
        period_bounds(r)
    }
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(format!("invalid year '{p}'")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(format!("invalid year '{p}'")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(format!("invalid year '{p}'")))?;
            Ok((d1, d2))
        }
        7 => {
            let m = MonthKey::parse(p)?;
            Ok((m.first_day(), m.last_day()))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!("unsupported range format '{p}'"))),
    }
}
