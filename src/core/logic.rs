use crate::core::calculator::duration;
use crate::core::calendar::grid::{self, CalendarGridBuilder};
use crate::core::schedule::index::ScheduleIndex;
use crate::core::schedule::session::ScheduleSession;
use crate::core::time_converter::TimeConverter;
use crate::errors::AppResult;
use crate::models::calendar::{CalendarCell, Direction, Granularity, WeekStart};
use crate::models::civil::CivilDateTime;
use crate::models::event::ScheduledEvent;
use crate::models::month_key::MonthKey;
use crate::models::summary::ScheduleSummary;
use crate::utils::time::parse_time_strict;
use chrono::NaiveDate;

/// Entry points used by the presentation layer. Reference date, view and
/// `today` are explicit so several views can coexist.
#[derive(Debug, Clone)]
pub struct Core {
    converter: TimeConverter,
    grid: CalendarGridBuilder,
}

impl Core {
    /// `today` is read from the clock once, in the civil zone.
    pub fn new(converter: TimeConverter, week_start: WeekStart) -> Self {
        let today = converter.today();
        Self::with_today(converter, week_start, today)
    }

    pub fn with_today(converter: TimeConverter, week_start: WeekStart, today: NaiveDate) -> Self {
        Self {
            converter,
            grid: CalendarGridBuilder::new(today, week_start),
        }
    }

    pub fn converter(&self) -> &TimeConverter {
        &self.converter
    }

    pub fn grid_builder(&self) -> &CalendarGridBuilder {
        &self.grid
    }

    pub fn get_grid(&self, reference: CivilDateTime, granularity: Granularity) -> Vec<CalendarCell> {
        self.grid.build(reference.date(), granularity)
    }

    /// Events for one cell, sorted by start. Out-of-period cells show nothing.
    pub fn get_events_for_cell<'a>(
        &self,
        index: &ScheduleIndex<'a>,
        cell: &CalendarCell,
    ) -> Vec<&'a ScheduledEvent> {
        if !cell.in_current_period {
            return Vec::new();
        }

        let mut events = index.events_on(cell.date.into()).to_vec();
        events.sort_by_key(|e| e.start);
        events
    }

    pub fn navigate(
        &self,
        reference: CivilDateTime,
        granularity: Granularity,
        direction: Direction,
    ) -> CivilDateTime {
        grid::advance(reference, granularity, direction)
    }

    /// Counters for `month`, or `None` while that month is not the one loaded.
    pub fn get_summary(&self, session: &ScheduleSession, month: MonthKey) -> Option<ScheduleSummary> {
        session.summary(month)
    }

    /// Minutes between two `HH:MM` times on one nominal date, wrapping past midnight.
    pub fn compute_duration(&self, start: &str, end: &str) -> AppResult<i64> {
        let s = parse_time_strict(start)?;
        let e = parse_time_strict(end)?;
        Ok(duration::elapsed_minutes_wrapping(s, e))
    }

    /// Minutes between two full civil datetimes, no wrap.
    pub fn compute_duration_between(&self, start: &CivilDateTime, end: &CivilDateTime) -> i64 {
        duration::elapsed_minutes_between(start, end)
    }

    pub fn compute_flight_time_from_odometers(&self, initial: f64, final_reading: f64) -> AppResult<f64> {
        duration::flight_time_from_odometers(initial, final_reading)
    }
}
