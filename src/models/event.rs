use super::instant::Instant;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
pub enum EventKind {
    Flight,
    Maintenance,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Flight => "flight",
            EventKind::Maintenance => "maintenance",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flight" => Some(EventKind::Flight),
            "maintenance" => Some(EventKind::Maintenance),
            _ => None,
        }
    }

    pub fn is_flight(&self) -> bool {
        matches!(self, EventKind::Flight)
    }
}

/// A flight or maintenance job as handed to the calendar engine.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduledEvent {
    pub id: i64,
    pub kind: EventKind,
    pub start: Instant,
    pub end: Option<Instant>,  // flights only
    pub resource_id: String,   // aircraft registration
    pub status_tag: String,
    pub title: String,
    pub participant: Option<String>, // pilot or technician
    pub odometer_start: Option<f64>,
    pub odometer_end: Option<f64>,
}

impl ScheduledEvent {
    /// Wall-clock minutes between start and end, when an end is recorded.
    pub fn scheduled_minutes(&self) -> Option<i64> {
        self.end.map(|end| self.start.minutes_until(&end))
    }
}

/// Row shape handed over by the store: timestamps still as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEventRecord {
    pub id: i64,
    pub kind: String,
    pub start: String,
    pub end: Option<String>,
    pub resource_id: String,
    pub status: String,
    pub title: String,
    pub participant: Option<String>,
    pub odometer_start: Option<f64>,
    pub odometer_end: Option<f64>,
}
