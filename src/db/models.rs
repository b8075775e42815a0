//! Insert payloads for the `flights` and `maintenance` tables.
//! Timestamps are already in stored form (`YYYY-MM-DDTHH:MM:SSZ`).

#[derive(Debug, Clone, Default)]
pub struct NewFlight {
    pub aircraft: String,
    pub pilot: Option<String>,
    pub title: String,
    pub status: String,
    pub start_at: String,
    pub end_at: Option<String>,
    pub odometer_start: Option<f64>,
    pub odometer_end: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewMaintenance {
    pub aircraft: String,
    pub technician: Option<String>,
    pub title: String,
    pub status: String,
    pub start_at: String,
}
