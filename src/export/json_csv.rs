// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON document: the civil zone and range the rows were rendered for, then the rows.
#[derive(Serialize)]
struct JsonDocument<'a> {
    zone: &'a str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    events: &'a [EventExport],
}

pub(crate) fn export_json(
    events: &[EventExport],
    path: &Path,
    zone: &str,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = JsonDocument {
        zone,
        from: bounds.map(|b| b.0),
        to: bounds.map(|b| b.1),
        events,
    };

    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row derived from `EventExport`.
pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in events {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
