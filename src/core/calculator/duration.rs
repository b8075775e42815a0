//! Elapsed-time and flight-time figures for flight and maintenance records.

use crate::errors::{AppError, AppResult};
use crate::models::civil::CivilDateTime;
use crate::models::event::ScheduledEvent;
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes from `start` to `end` when only the time-of-day was recorded on a
/// shared nominal date. An `end` earlier than `start` is read as crossing
/// midnight, so a flight is assumed to never exceed 24h. Never negative.
///
/// Only valid for that recording shape: with full datetimes use
/// [`elapsed_minutes_between`].
pub fn elapsed_minutes_wrapping(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = (end - start).num_minutes();
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}

/// True calendar difference between two civil datetimes, no wrap applied.
/// Negative when `end` precedes `start`.
pub fn elapsed_minutes_between(start: &CivilDateTime, end: &CivilDateTime) -> i64 {
    (end.naive() - start.naive()).num_minutes()
}

/// Flight time in decimal hours from two odometer (Hobbs) readings,
/// rounded to one decimal place.
pub fn flight_time_from_odometers(initial: f64, final_reading: f64) -> AppResult<f64> {
    if !initial.is_finite() || !final_reading.is_finite() || final_reading < initial {
        return Err(AppError::InvalidOdometerRange {
            initial,
            final_reading,
        });
    }

    Ok(((final_reading - initial) * 10.0).round() / 10.0)
}

/// `H:MM`, hours unbounded, minutes always two digits.
pub fn run_time_label(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

/// Authoritative flight time for a record, in decimal hours.
///
/// Odometer readings win when both are present and consistent; otherwise the
/// scheduled start/end span is used. `None` when neither is available.
pub fn flight_time(event: &ScheduledEvent) -> Option<f64> {
    if let (Some(a), Some(b)) = (event.odometer_start, event.odometer_end)
        && let Ok(hours) = flight_time_from_odometers(a, b)
    {
        return Some(hours);
    }

    event
        .scheduled_minutes()
        .filter(|m| *m >= 0)
        .map(|m| ((m as f64 / 60.0) * 10.0).round() / 10.0)
}
