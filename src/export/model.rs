// src/export/model.rs

use crate::core::calculator::duration::{flight_time, run_time_label};
use crate::core::classifier::category_of;
use crate::core::time_converter::{DisplayPattern, TimeConverter};
use crate::models::event::ScheduledEvent;
use serde::Serialize;

/// Flat row for event export. Dates and times are civil.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub kind: String,
    pub category: String,
    pub aircraft: String,
    pub participant: String,
    pub title: String,
    pub status: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub run_time: String,
    pub flight_hours: Option<f64>,
    pub start_utc: String,
}

impl EventExport {
    pub fn from_event(ev: &ScheduledEvent, converter: &TimeConverter) -> Self {
        let end = ev
            .end
            .map(|e| converter.format_for_display(e, DisplayPattern::DateTimeShort))
            .unwrap_or_default();

        Self {
            id: ev.id,
            kind: ev.kind.to_db_str().to_string(),
            category: category_of(ev).label().to_string(),
            aircraft: ev.resource_id.clone(),
            participant: ev.participant.clone().unwrap_or_default(),
            title: ev.title.clone(),
            status: ev.status_tag.clone(),
            date: converter.format_for_display(ev.start, DisplayPattern::DateOnly),
            start: converter.format_for_display(ev.start, DisplayPattern::TimeOnly),
            end,
            run_time: ev.scheduled_minutes().map(run_time_label).unwrap_or_default(),
            flight_hours: if ev.kind.is_flight() { flight_time(ev) } else { None },
            start_utc: converter.format_for_store(ev.start),
        }
    }
}
