use crate::errors::AppResult;
use crate::models::instant::Instant;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal audit line into the `log` table, stamped in UTC.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Instant::now().to_string();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as [`ttlog`], but a failure only produces a warning.
pub fn ttlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        tracing::warn!("failed to write internal log: {}", e);
    }
}
