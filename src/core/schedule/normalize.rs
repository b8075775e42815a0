//! Turns raw store rows into scheduled events, skipping the ones that do not parse.

use crate::core::time_converter::TimeConverter;
use crate::errors::{AppError, AppResult};
use crate::models::event::{EventKind, RawEventRecord, ScheduledEvent};
use chrono::NaiveDate;

/// A store row left out of the schedule, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: i64,
    pub kind: String,
    pub reason: String,
    /// Civil day the row most likely belongs to, `None` when the start text
    /// carries no readable date at all.
    pub day: Option<NaiveDate>,
}

impl SkippedRecord {
    /// Rows with no readable date are kept in every count: nothing shows
    /// they are outside.
    pub fn falls_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.day.is_none_or(|d| d >= start && d <= end)
    }
}

#[derive(Debug, Default)]
pub struct NormalizedBatch {
    pub events: Vec<ScheduledEvent>,
    pub skipped: Vec<SkippedRecord>,
}

pub fn to_scheduled_event(raw: &RawEventRecord, converter: &TimeConverter) -> AppResult<ScheduledEvent> {
    let kind = EventKind::from_db_str(&raw.kind)
        .ok_or_else(|| AppError::InvalidEventKind(raw.kind.clone()))?;

    let start = converter.parse_stored(&raw.start)?;

    let end = match (&kind, raw.end.as_deref().map(str::trim)) {
        (EventKind::Flight, Some(text)) if !text.is_empty() => Some(converter.parse_stored(text)?),
        _ => None,
    };

    Ok(ScheduledEvent {
        id: raw.id,
        kind,
        start,
        end,
        resource_id: raw.resource_id.clone(),
        status_tag: raw.status.clone(),
        title: raw.title.clone(),
        participant: raw.participant.clone().filter(|p| !p.trim().is_empty()),
        odometer_start: raw.odometer_start,
        odometer_end: raw.odometer_end,
    })
}

/// Convert every row; a bad row is recorded in `skipped` and never aborts the batch.
pub fn normalize_records(records: &[RawEventRecord], converter: &TimeConverter) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for raw in records {
        match to_scheduled_event(raw, converter) {
            Ok(ev) => batch.events.push(ev),
            Err(e) => {
                tracing::debug!(id = raw.id, kind = %raw.kind, "skipping record: {}", e);
                batch.skipped.push(SkippedRecord {
                    id: raw.id,
                    kind: raw.kind.clone(),
                    reason: e.to_string(),
                    day: day_hint(raw, converter),
                });
            }
        }
    }

    batch
}

/// The start's civil date when it parses, else the `YYYY-MM-DD` prefix of the text.
fn day_hint(raw: &RawEventRecord, converter: &TimeConverter) -> Option<NaiveDate> {
    if let Ok(start) = converter.parse_stored(&raw.start) {
        return Some(converter.to_civil(start).date());
    }
    raw.start
        .trim()
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
