use crate::db::models::{NewFlight, NewMaintenance};
use crate::errors::{AppError, AppResult};
use crate::models::event::{EventKind, RawEventRecord};
use crate::models::instant::Instant;
use rusqlite::{Connection, Result, Row, params};

const FLIGHT_COLUMNS: &str =
    "id, aircraft, pilot, title, status, start_at, end_at, odometer_start, odometer_end";
const MAINTENANCE_COLUMNS: &str = "id, aircraft, technician, title, status, start_at";

pub fn map_flight_row(row: &Row) -> Result<RawEventRecord> {
    Ok(RawEventRecord {
        id: row.get("id")?,
        kind: EventKind::Flight.to_db_str().to_string(),
        start: row.get("start_at")?,
        end: row.get("end_at")?,
        resource_id: row.get("aircraft")?,
        status: row.get("status")?,
        title: row.get("title")?,
        participant: row.get("pilot")?,
        odometer_start: row.get("odometer_start")?,
        odometer_end: row.get("odometer_end")?,
    })
}

pub fn map_maintenance_row(row: &Row) -> Result<RawEventRecord> {
    Ok(RawEventRecord {
        id: row.get("id")?,
        kind: EventKind::Maintenance.to_db_str().to_string(),
        start: row.get("start_at")?,
        end: None,
        resource_id: row.get("aircraft")?,
        status: row.get("status")?,
        title: row.get("title")?,
        participant: row.get("technician")?,
        odometer_start: None,
        odometer_end: None,
    })
}

/// Flights and maintenance jobs whose `start_at` text sorts in `[lower, upper)`.
///
/// The bounds are compared as text, so callers widen them by a day to cover
/// rows written with a civil offset; trimming by civil date happens later.
pub fn load_events_between(
    conn: &Connection,
    lower: &str,
    upper: &str,
    aircraft: Option<&str>,
) -> AppResult<Vec<RawEventRecord>> {
    let filter = if aircraft.is_some() {
        "WHERE start_at >= ?1 AND start_at < ?2 AND aircraft = ?3"
    } else {
        "WHERE start_at >= ?1 AND start_at < ?2"
    };

    let mut out = Vec::new();

    let mut stmt = conn.prepare(&format!(
        "SELECT {FLIGHT_COLUMNS} FROM flights {filter} ORDER BY start_at ASC"
    ))?;
    let rows = match aircraft {
        Some(a) => stmt.query_map(params![lower, upper, a], map_flight_row)?,
        None => stmt.query_map(params![lower, upper], map_flight_row)?,
    };
    for r in rows {
        out.push(r?);
    }

    let mut stmt = conn.prepare(&format!(
        "SELECT {MAINTENANCE_COLUMNS} FROM maintenance {filter} ORDER BY start_at ASC"
    ))?;
    let rows = match aircraft {
        Some(a) => stmt.query_map(params![lower, upper, a], map_maintenance_row)?,
        None => stmt.query_map(params![lower, upper], map_maintenance_row)?,
    };
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

pub fn load_event(conn: &Connection, kind: EventKind, id: i64) -> AppResult<RawEventRecord> {
    let found = match kind {
        EventKind::Flight => conn.query_row(
            &format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ?1"),
            [id],
            map_flight_row,
        ),
        EventKind::Maintenance => conn.query_row(
            &format!("SELECT {MAINTENANCE_COLUMNS} FROM maintenance WHERE id = ?1"),
            [id],
            map_maintenance_row,
        ),
    };

    match found {
        Ok(r) => Ok(r),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(AppError::EventNotFound {
            kind: kind.to_db_str().to_string(),
            id,
        }),
        Err(e) => Err(e.into()),
    }
}

pub fn insert_flight(conn: &Connection, f: &NewFlight) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO flights (aircraft, pilot, title, status, start_at, end_at, odometer_start, odometer_end, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            f.aircraft,
            f.pilot,
            f.title,
            f.status,
            f.start_at,
            f.end_at,
            f.odometer_start,
            f.odometer_end,
            Instant::now().to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_maintenance(conn: &Connection, m: &NewMaintenance) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance (aircraft, technician, title, status, start_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            m.aircraft,
            m.technician,
            m.title,
            m.status,
            m.start_at,
            Instant::now().to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn table_for(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Flight => "flights",
        EventKind::Maintenance => "maintenance",
    }
}

pub fn delete_event(conn: &Connection, kind: EventKind, id: i64) -> AppResult<()> {
    let n = conn.execute(&format!("DELETE FROM {} WHERE id = ?1", table_for(kind)), [id])?;
    if n == 0 {
        return Err(AppError::EventNotFound {
            kind: kind.to_db_str().to_string(),
            id,
        });
    }
    Ok(())
}

pub fn update_status(conn: &Connection, kind: EventKind, id: i64, status: &str) -> AppResult<()> {
    let n = conn.execute(
        &format!("UPDATE {} SET status = ?1 WHERE id = ?2", table_for(kind)),
        params![status, id],
    )?;
    if n == 0 {
        return Err(AppError::EventNotFound {
            kind: kind.to_db_str().to_string(),
            id,
        });
    }
    Ok(())
}

pub fn update_odometers(conn: &Connection, id: i64, start: f64, end: f64) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE flights SET odometer_start = ?1, odometer_end = ?2 WHERE id = ?3",
        params![start, end, id],
    )?;
    if n == 0 {
        return Err(AppError::EventNotFound {
            kind: EventKind::Flight.to_db_str().to_string(),
            id,
        });
    }
    Ok(())
}
