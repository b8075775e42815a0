//! Events over an arbitrary civil date span, assembled from month fetches.

use super::normalize::normalize_records;
use super::session::MonthSchedule;
use crate::core::time_converter::TimeConverter;
use crate::errors::AppResult;
use crate::models::event::ScheduledEvent;
use crate::models::month_key::MonthKey;
use crate::store::EventStore;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct SpanEvents {
    pub events: Vec<ScheduledEvent>,
    /// Distinct rows that could not be read.
    pub skipped: usize,
}

/// Events whose civil start date lies in `start..=end`, ordered by start.
///
/// Without a resource filter every month touched by the span is fetched
/// once; each month keeps only its own events, so rows returned by two
/// neighbouring fetches are counted once.
pub fn load_span<S: EventStore + ?Sized>(
    store: &S,
    converter: &TimeConverter,
    start: NaiveDate,
    end: NaiveDate,
    resource: Option<&str>,
) -> AppResult<SpanEvents> {
    if end < start {
        return Ok(SpanEvents::default());
    }

    let mut events = Vec::new();
    let mut skipped = HashSet::new();

    match resource {
        Some(r) => {
            let records = store.fetch_events_for_resource(r, start, end)?;
            let batch = normalize_records(&records, converter);
            skipped.extend(
                batch
                    .skipped
                    .into_iter()
                    .filter(|s| s.falls_within(start, end))
                    .map(|s| (s.kind, s.id)),
            );
            events = batch.events;
        }
        None => {
            let last = MonthKey::of(end);
            let mut month = MonthKey::of(start);
            loop {
                let records = store.fetch_events_for_month(month)?;
                let schedule = MonthSchedule::from_records(month, &records, converter);
                skipped.extend(
                    schedule
                        .skipped()
                        .iter()
                        .filter(|s| s.falls_within(start, end))
                        .map(|s| (s.kind.clone(), s.id)),
                );
                events.extend_from_slice(schedule.events());

                if month >= last {
                    break;
                }
                month = month.next();
            }
        }
    }

    events.retain(|ev| {
        let day = converter.to_civil(ev.start).date();
        day >= start && day <= end
    });
    events.sort_by_key(|ev| (ev.start, ev.id));

    Ok(SpanEvents {
        events,
        skipped: skipped.len(),
    })
}
