//! Boundary to the persistence collaborator.

use crate::errors::AppResult;
use crate::models::event::RawEventRecord;
use crate::models::month_key::MonthKey;
use chrono::NaiveDate;

/// Source of raw flight and maintenance rows.
///
/// Timestamps come back as text; the calendar engine parses them. A month
/// fetch may return rows just outside the month (the store cannot know the
/// civil zone of legacy offset-less text); callers trim by civil date.
pub trait EventStore {
    fn fetch_events_for_month(&self, month: MonthKey) -> AppResult<Vec<RawEventRecord>>;

    fn fetch_events_for_resource(
        &self,
        resource_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<RawEventRecord>>;
}
