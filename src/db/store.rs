use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::AppResult;
use crate::models::event::RawEventRecord;
use crate::models::month_key::MonthKey;
use crate::store::EventStore;
use chrono::{Days, NaiveDate};

/// `EventStore` over the local SQLite database.
pub struct SqliteStore<'a> {
    pool: &'a DbPool,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// Text bounds covering `start..=end` plus one day of slack on each side.
fn widened_bounds(start: NaiveDate, end: NaiveDate) -> (String, String) {
    let lower = start.checked_sub_days(Days::new(1)).unwrap_or(start);
    let upper = end.checked_add_days(Days::new(2)).unwrap_or(end);
    (
        lower.format("%Y-%m-%d").to_string(),
        upper.format("%Y-%m-%d").to_string(),
    )
}

impl EventStore for SqliteStore<'_> {
    fn fetch_events_for_month(&self, month: MonthKey) -> AppResult<Vec<RawEventRecord>> {
        let (lower, upper) = widened_bounds(month.first_day(), month.last_day());
        tracing::debug!(%month, %lower, %upper, "fetching month");
        load_events_between(&self.pool.conn, &lower, &upper, None)
    }

    fn fetch_events_for_resource(
        &self,
        resource_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<RawEventRecord>> {
        let (lower, upper) = widened_bounds(start, end);
        load_events_between(&self.pool.conn, &lower, &upper, Some(resource_id))
    }
}
