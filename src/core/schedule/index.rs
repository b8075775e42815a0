//! Per-day index over a snapshot of scheduled events.

use crate::core::classifier::category_of;
use crate::core::time_converter::TimeConverter;
use crate::models::category::Category;
use crate::models::day_key::DayKey;
use crate::models::event::{EventKind, ScheduledEvent};
use crate::models::summary::ScheduleSummary;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Buckets event references by the civil day of their start. Never owns the
/// events; rebuild it whenever the source list changes.
#[derive(Debug, Default)]
pub struct ScheduleIndex<'a> {
    buckets: HashMap<DayKey, Vec<&'a ScheduledEvent>>,
    len: usize,
}

impl<'a> ScheduleIndex<'a> {
    pub fn build(events: &'a [ScheduledEvent], converter: &TimeConverter) -> Self {
        let mut buckets: HashMap<DayKey, Vec<&'a ScheduledEvent>> = HashMap::new();

        for ev in events {
            let key = converter.to_civil(ev.start).day_key();
            buckets.entry(key).or_default().push(ev);
        }

        Self {
            buckets,
            len: events.len(),
        }
    }

    /// Events starting on `key`, in source order. Empty if none.
    pub fn events_on(&self, key: DayKey) -> &[&'a ScheduledEvent] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events starting on any day from `start` to `end`, both included,
    /// ordered by day. An inverted range yields nothing.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&'a ScheduledEvent> {
        if end < start {
            return Vec::new();
        }

        let (lo, hi) = (DayKey::from(start), DayKey::from(end));
        let mut keys: Vec<&DayKey> = self
            .buckets
            .keys()
            .filter(|k| **k >= lo && **k <= hi)
            .collect();
        keys.sort();

        keys.into_iter()
            .flat_map(|k| self.buckets[k].iter().copied())
            .collect()
    }

    /// Occupied days in calendar order.
    pub fn days(&self) -> Vec<DayKey> {
        let mut keys: Vec<DayKey> = self.buckets.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Counts per kind and, for flights, per status. Each event lands in exactly
/// one kind bucket and each flight in exactly one status bucket.
pub fn summary<'e, I>(events: I) -> ScheduleSummary
where
    I: IntoIterator<Item = &'e ScheduledEvent>,
{
    let mut s = ScheduleSummary::default();

    for ev in events {
        match ev.kind {
            EventKind::Maintenance => s.maintenance_count += 1,
            EventKind::Flight => {
                s.flight_count += 1;
                match category_of(ev) {
                    Category::FlightCompleted => s.completed_count += 1,
                    Category::FlightScheduled => s.scheduled_count += 1,
                    Category::FlightCancelled => s.cancelled_count += 1,
                    Category::Maintenance | Category::Unknown => s.unknown_count += 1,
                }
            }
        }
    }

    s
}
