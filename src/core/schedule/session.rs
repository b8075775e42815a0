//! The loaded month and the "last request wins" rule for month fetches.

use super::index::{self, ScheduleIndex};
use super::normalize::{SkippedRecord, normalize_records};
use crate::core::time_converter::TimeConverter;
use crate::errors::AppResult;
use crate::models::event::{RawEventRecord, ScheduledEvent};
use crate::models::month_key::MonthKey;
use crate::models::summary::ScheduleSummary;
use crate::store::EventStore;

/// Normalized events of one civil month.
#[derive(Debug)]
pub struct MonthSchedule {
    month: MonthKey,
    events: Vec<ScheduledEvent>,
    skipped: Vec<SkippedRecord>,
    outside_month: usize,
}

impl MonthSchedule {
    /// Parse the rows and keep the events whose civil start lies in `month`.
    pub fn from_records(month: MonthKey, records: &[RawEventRecord], converter: &TimeConverter) -> Self {
        let batch = normalize_records(records, converter);
        let total = batch.events.len() + batch.skipped.len();
        let (first, last) = (month.first_day(), month.last_day());

        // The store widens month fetches, so unreadable rows from the
        // neighbouring days are dropped here rather than reported.
        let skipped: Vec<SkippedRecord> = batch
            .skipped
            .into_iter()
            .filter(|s| s.falls_within(first, last))
            .collect();

        let events: Vec<ScheduledEvent> = batch
            .events
            .into_iter()
            .filter(|ev| month.contains(converter.to_civil(ev.start).date()))
            .collect();

        Self {
            month,
            outside_month: total - events.len() - skipped.len(),
            events,
            skipped,
        }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// Unreadable rows of this month only.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Rows, readable or not, that belong to a neighbouring month.
    pub fn outside_month(&self) -> usize {
        self.outside_month
    }

    pub fn index<'a>(&'a self, converter: &TimeConverter) -> ScheduleIndex<'a> {
        ScheduleIndex::build(&self.events, converter)
    }

    pub fn summary(&self) -> ScheduleSummary {
        index::summary(&self.events)
    }
}

/// Handle for one outstanding month fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    month: MonthKey,
    generation: u64,
}

impl RequestTicket {
    pub fn month(&self) -> MonthKey {
        self.month
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied {
        month: MonthKey,
        events: usize,
        skipped: usize,
    },
    /// A newer request was issued after this one; nothing was changed.
    StaleResponseDiscarded {
        requested: MonthKey,
        selected: MonthKey,
    },
}

/// Holds the month currently on display and decides which fetch responses
/// may replace it.
#[derive(Debug)]
pub struct ScheduleSession {
    converter: TimeConverter,
    selected: Option<MonthKey>,
    generation: u64,
    current: Option<MonthSchedule>,
}

impl ScheduleSession {
    pub fn new(converter: TimeConverter) -> Self {
        Self {
            converter,
            selected: None,
            generation: 0,
            current: None,
        }
    }

    pub fn converter(&self) -> &TimeConverter {
        &self.converter
    }

    /// Select `month` and issue a ticket for its fetch. Any earlier ticket
    /// becomes stale.
    pub fn begin(&mut self, month: MonthKey) -> RequestTicket {
        self.generation += 1;
        self.selected = Some(month);
        RequestTicket {
            month,
            generation: self.generation,
        }
    }

    /// Apply a fetch response.
    ///
    /// A stale ticket is discarded whatever the response holds. A failed
    /// response is returned as an error and the displayed month is kept.
    pub fn commit(
        &mut self,
        ticket: RequestTicket,
        response: AppResult<Vec<RawEventRecord>>,
    ) -> AppResult<CommitOutcome> {
        if ticket.generation != self.generation {
            let selected = self.selected.unwrap_or(ticket.month);
            tracing::debug!(
                requested = %ticket.month,
                selected = %selected,
                "discarding stale month response"
            );
            return Ok(CommitOutcome::StaleResponseDiscarded {
                requested: ticket.month,
                selected,
            });
        }

        let records = response?;
        let schedule = MonthSchedule::from_records(ticket.month, &records, &self.converter);

        if !schedule.skipped().is_empty() {
            tracing::warn!(
                month = %ticket.month,
                skipped = schedule.skipped().len(),
                "some records could not be read and were left out"
            );
        }

        let outcome = CommitOutcome::Applied {
            month: ticket.month,
            events: schedule.events().len(),
            skipped: schedule.skipped().len(),
        };
        self.current = Some(schedule);
        Ok(outcome)
    }

    /// Select, fetch and commit in one go.
    pub fn load<S: EventStore + ?Sized>(&mut self, store: &S, month: MonthKey) -> AppResult<CommitOutcome> {
        let ticket = self.begin(month);
        let response = store.fetch_events_for_month(month);
        self.commit(ticket, response)
    }

    pub fn selected_month(&self) -> Option<MonthKey> {
        self.selected
    }

    pub fn current(&self) -> Option<&MonthSchedule> {
        self.current.as_ref()
    }

    /// True while the selected month differs from the one on display.
    pub fn is_pending(&self) -> bool {
        self.selected != self.current.as_ref().map(|s| s.month())
    }

    /// Counts for `month`, if that month is the one loaded.
    pub fn summary(&self, month: MonthKey) -> Option<ScheduleSummary> {
        self.current
            .as_ref()
            .filter(|s| s.month() == month)
            .map(MonthSchedule::summary)
    }
}
