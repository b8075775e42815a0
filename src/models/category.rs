use serde::Serialize;
use std::fmt;

/// Presentation category used for grouping and summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    FlightCompleted,
    FlightScheduled,
    FlightCancelled,
    Maintenance,
    Unknown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::FlightCompleted => "completed",
            Category::FlightScheduled => "scheduled",
            Category::FlightCancelled => "cancelled",
            Category::Maintenance => "maintenance",
            Category::Unknown => "unknown",
        }
    }

    /// One-letter marker used in compact grid cells.
    pub fn marker(&self) -> char {
        match self {
            Category::FlightCompleted => 'C',
            Category::FlightScheduled => 'S',
            Category::FlightCancelled => 'X',
            Category::Maintenance => 'M',
            Category::Unknown => '?',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
