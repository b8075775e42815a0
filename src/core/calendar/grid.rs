//! Month, week and day grids for the calendar views.

use crate::models::calendar::{CalendarCell, Direction, Granularity, WeekStart};
use crate::models::civil::CivilDateTime;
use crate::models::month_key::MonthKey;
use chrono::{Datelike, Duration, Months, NaiveDate};

/// `date` moved by `days`, or `None` outside chrono's date range.
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Grid builder for one rendering pass. `today` is passed in rather than read
/// from the clock so views stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGridBuilder {
    today: NaiveDate,
    week_start: WeekStart,
}

impl CalendarGridBuilder {
    pub fn new(today: NaiveDate, week_start: WeekStart) -> Self {
        Self { today, week_start }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn build(&self, reference: NaiveDate, granularity: Granularity) -> Vec<CalendarCell> {
        match granularity {
            Granularity::Month => self.build_month_grid(reference),
            Granularity::Week => self.build_week_grid(reference),
            Granularity::Day => self.build_day_grid(reference),
        }
    }

    /// Whole weeks covering the reference month. Leading and trailing cells
    /// carry the neighbouring months' dates and are out of period.
    ///
    /// In the first and last month chrono can represent, padding cells that
    /// would fall outside its range are left out.
    pub fn build_month_grid(&self, reference: NaiveDate) -> Vec<CalendarCell> {
        let month = MonthKey::of(reference);
        let first = month.first_day();
        let offset = self.offset_in_week(first);
        let days = month.days_in_month() as i64;

        let rows = (offset + days + 6) / 7;

        (0..rows * 7)
            .filter_map(|i| shift(first, i - offset))
            .map(|date| self.cell(date, month.contains(date)))
            .collect()
    }

    /// Seven days from the week start; shorter only at the ends of chrono's range.
    pub fn build_week_grid(&self, reference: NaiveDate) -> Vec<CalendarCell> {
        let offset = self.offset_in_week(reference);
        (0..7)
            .filter_map(|i| shift(reference, i - offset))
            .map(|date| self.cell(date, true))
            .collect()
    }

    pub fn build_day_grid(&self, reference: NaiveDate) -> Vec<CalendarCell> {
        vec![self.cell(reference, true)]
    }

    /// First and last date of the period shown for `reference`, in-period cells only.
    pub fn period_bounds(&self, reference: NaiveDate, granularity: Granularity) -> (NaiveDate, NaiveDate) {
        match granularity {
            Granularity::Month => {
                let m = MonthKey::of(reference);
                (m.first_day(), m.last_day())
            }
            Granularity::Week => {
                let offset = self.offset_in_week(reference);
                (
                    shift(reference, -offset).unwrap_or(NaiveDate::MIN),
                    shift(reference, 6 - offset).unwrap_or(NaiveDate::MAX),
                )
            }
            Granularity::Day => (reference, reference),
        }
    }

    fn offset_in_week(&self, date: NaiveDate) -> i64 {
        let day = date.weekday().num_days_from_sunday();
        let start = self.week_start.weekday().num_days_from_sunday();
        ((day + 7 - start) % 7) as i64
    }

    fn cell(&self, date: NaiveDate, in_current_period: bool) -> CalendarCell {
        CalendarCell {
            date,
            in_current_period,
            is_today: date == self.today,
        }
    }
}

/// Move the reference one period forward or back.
///
/// Month steps land on the first of the target month so day-of-month overflow
/// (Jan 31 → Feb 31) cannot happen. Time-of-day is kept. At the ends of
/// chrono's date range the reference does not move.
pub fn advance(reference: CivilDateTime, granularity: Granularity, direction: Direction) -> CivilDateTime {
    match granularity {
        Granularity::Month => {
            let first = MonthKey::of(reference.date()).first_day();
            let target = match direction {
                Direction::Forward => first.checked_add_months(Months::new(1)),
                Direction::Backward => first.checked_sub_months(Months::new(1)),
            };
            target.map_or(reference, |d| reference.with_date(d))
        }
        Granularity::Week => reference.plus_days(7 * direction.sign()),
        Granularity::Day => reference.plus_days(direction.sign()),
    }
}
