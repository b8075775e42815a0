use crate::core::calculator::duration::{
    elapsed_minutes_between, elapsed_minutes_wrapping, flight_time_from_odometers, run_time_label,
};
use crate::core::time_converter::TimeConverter;
use crate::db::log::ttlog_quiet;
use crate::db::models::{NewFlight, NewMaintenance};
use crate::db::pool::DbPool;
use crate::db::queries::{insert_flight, insert_maintenance, update_odometers, update_status};
use crate::errors::AppResult;
use crate::models::event::EventKind;
use crate::ui::messages::success;
use crate::utils::time::parse_time_strict;

/// Flight as entered by the user: civil date, `HH:MM` times.
#[derive(Debug, Clone)]
pub struct FlightDraft {
    pub date: String,
    pub start: String,
    pub end: Option<String>,
    pub aircraft: String,
    pub pilot: Option<String>,
    pub title: String,
    pub status: String,
    pub odometer_start: Option<f64>,
    pub odometer_end: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MaintenanceDraft {
    pub date: String,
    pub start: String,
    pub aircraft: String,
    pub technician: Option<String>,
    pub title: String,
    pub status: String,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a flight. Only the end time-of-day is entered, so an end earlier
    /// than the start is taken as landing after midnight.
    pub fn add_flight(pool: &mut DbPool, converter: &TimeConverter, draft: &FlightDraft) -> AppResult<i64> {
        let start = converter.parse_civil_input(&draft.date, &draft.start)?;

        let end = match &draft.end {
            Some(t) => {
                let end_time = parse_time_strict(t)?;
                let minutes = elapsed_minutes_wrapping(start.time(), end_time);
                Some(start.plus_minutes(minutes))
            }
            None => None,
        };

        let odometers = match (draft.odometer_start, draft.odometer_end) {
            (Some(a), Some(b)) => {
                flight_time_from_odometers(a, b)?;
                (Some(a), Some(b))
            }
            other => other,
        };

        let flight = NewFlight {
            aircraft: draft.aircraft.clone(),
            pilot: draft.pilot.clone(),
            title: draft.title.clone(),
            status: draft.status.clone(),
            start_at: converter.format_for_store(converter.to_instant(start)),
            end_at: end.map(|e| converter.format_for_store(converter.to_instant(e))),
            odometer_start: odometers.0,
            odometer_end: odometers.1,
        };

        let id = insert_flight(&pool.conn, &flight)?;

        let span = end
            .map(|e| format!(" ({})", run_time_label(elapsed_minutes_between(&start, &e))))
            .unwrap_or_default();

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("flight #{id}"),
            &format!("{} {} {}{}", draft.aircraft, start, draft.status, span),
        );

        success(format!(
            "Added flight #{} on {} at {}{}.",
            id, draft.aircraft, start, span
        ));

        Ok(id)
    }

    pub fn add_maintenance(
        pool: &mut DbPool,
        converter: &TimeConverter,
        draft: &MaintenanceDraft,
    ) -> AppResult<i64> {
        let start = converter.parse_civil_input(&draft.date, &draft.start)?;

        let job = NewMaintenance {
            aircraft: draft.aircraft.clone(),
            technician: draft.technician.clone(),
            title: draft.title.clone(),
            status: draft.status.clone(),
            start_at: converter.format_for_store(converter.to_instant(start)),
        };

        let id = insert_maintenance(&pool.conn, &job)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("maintenance #{id}"),
            &format!("{} {} {}", draft.aircraft, start, draft.title),
        );

        success(format!(
            "Added maintenance #{} on {} at {}.",
            id, draft.aircraft, start
        ));

        Ok(id)
    }

    pub fn set_status(pool: &mut DbPool, kind: EventKind, id: i64, status: &str) -> AppResult<()> {
        update_status(&pool.conn, kind, id, status)?;
        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("{} #{id}", kind.to_db_str()),
            &format!("status → {status}"),
        );
        success(format!("{} #{} is now '{}'.", kind.to_db_str(), id, status));
        Ok(())
    }

    /// Record Hobbs readings on an existing flight. Rejected when the final
    /// reading is below the initial one.
    pub fn set_odometers(pool: &mut DbPool, id: i64, start: f64, end: f64) -> AppResult<f64> {
        let hours = flight_time_from_odometers(start, end)?;
        update_odometers(&pool.conn, id, start, end)?;
        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("flight #{id}"),
            &format!("odometers {start:.1} → {end:.1} ({hours:.1} h)"),
        );
        success(format!("Flight #{} odometers set: {:.1} h.", id, hours));
        Ok(hours)
    }
}
