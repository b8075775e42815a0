// src/export/logic.rs

use crate::core::schedule::normalize::normalize_records;
use crate::core::time_converter::TimeConverter;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::range::parse_range;
use crate::store::EventStore;
use crate::ui::messages::warning;
use chrono::{Days, NaiveDate};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export flights and maintenance jobs with civil dates and times.
    ///
    /// - `range`: `None`, `"all"` or an expression accepted by `parse_range`
    /// - `aircraft`: restrict to a single tail number
    pub fn export(
        pool: &DbPool,
        converter: &TimeConverter,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        aircraft: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.trim().eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = Self::collect(pool, converter, bounds, aircraft)?;
        tracing::debug!(format = format.as_str(), rows = rows.len(), "exporting events");

        if rows.is_empty() {
            warning("No events found for the selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path, &converter.zone().name, bounds)?,
        }

        Ok(rows.len())
    }

    /// Export rows for `bounds` (inclusive civil dates), ordered by start.
    pub fn collect(
        pool: &DbPool,
        converter: &TimeConverter,
        bounds: Option<(NaiveDate, NaiveDate)>,
        aircraft: Option<&str>,
    ) -> AppResult<Vec<EventExport>> {
        let raw = match (bounds, aircraft) {
            (Some((start, end)), Some(a)) => {
                SqliteStore::new(pool).fetch_events_for_resource(a, start, end)?
            }
            (Some((start, end)), None) => {
                let lower = start.checked_sub_days(Days::new(1)).unwrap_or(start);
                let upper = end.checked_add_days(Days::new(2)).unwrap_or(end);
                load_events_between(
                    &pool.conn,
                    &lower.format("%Y-%m-%d").to_string(),
                    &upper.format("%Y-%m-%d").to_string(),
                    None,
                )?
            }
            // "~" sorts after every digit, so this is the whole table.
            (None, a) => load_events_between(&pool.conn, "", "~", a)?,
        };

        let batch = normalize_records(&raw, converter);
        let unreadable = batch
            .skipped
            .iter()
            .filter(|s| bounds.is_none_or(|(start, end)| s.falls_within(start, end)))
            .count();
        if unreadable > 0 {
            warning(format!(
                "{unreadable} record(s) with unreadable timestamps were left out of the export."
            ));
        }

        let mut events = batch.events;
        if let Some((start, end)) = bounds {
            events.retain(|ev| {
                let day = converter.to_civil(ev.start).date();
                day >= start && day <= end
            });
        }
        events.sort_by_key(|ev| (ev.start, ev.id));

        Ok(events
            .iter()
            .map(|ev| EventExport::from_event(ev, converter))
            .collect())
    }
}
