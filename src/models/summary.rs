use serde::Serialize;

/// Per-month counts. Kind buckets sum to the event total; the four status
/// buckets sum to `flight_count`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub flight_count: usize,
    pub maintenance_count: usize,
    pub completed_count: usize,
    pub scheduled_count: usize,
    pub cancelled_count: usize,
    pub unknown_count: usize,
}

impl ScheduleSummary {
    pub fn total(&self) -> usize {
        self.flight_count + self.maintenance_count
    }
}
