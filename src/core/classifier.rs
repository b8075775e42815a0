//! Maps scheduled events to presentation categories.

use crate::models::category::Category;
use crate::models::event::{EventKind, ScheduledEvent};

/// Category of an event. A flight with an unrecognized status tag is
/// `Unknown`; upstream data is not guaranteed to be clean.
pub fn category_of(event: &ScheduledEvent) -> Category {
    match event.kind {
        EventKind::Maintenance => Category::Maintenance,
        EventKind::Flight => flight_category(&event.status_tag),
    }
}

pub fn flight_category(status_tag: &str) -> Category {
    match status_tag.trim().to_lowercase().as_str() {
        "completed" | "complete" | "done" => Category::FlightCompleted,
        "scheduled" | "confirmed" | "pending" => Category::FlightScheduled,
        "cancelled" | "canceled" => Category::FlightCancelled,
        _ => Category::Unknown,
    }
}
