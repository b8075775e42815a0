use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `flights` table (base schema, odometer columns come from a migration).
///
/// `start_at`/`end_at` hold stored instants as `YYYY-MM-DDTHH:MM:SSZ`.
/// Older rows may carry offset-less text.
fn create_flights_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS flights (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            aircraft    TEXT NOT NULL,
            pilot       TEXT,
            title       TEXT NOT NULL DEFAULT '',
            status      TEXT NOT NULL DEFAULT 'scheduled',
            start_at    TEXT NOT NULL,
            end_at      TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_flights_start ON flights(start_at);
        CREATE INDEX IF NOT EXISTS idx_flights_aircraft ON flights(aircraft, start_at);
        "#,
    )?;
    Ok(())
}

fn create_maintenance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            aircraft    TEXT NOT NULL,
            technician  TEXT,
            title       TEXT NOT NULL DEFAULT '',
            status      TEXT NOT NULL DEFAULT 'scheduled',
            start_at    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_maintenance_start ON maintenance(start_at);
        CREATE INDEX IF NOT EXISTS idx_maintenance_aircraft ON maintenance(aircraft, start_at);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Hobbs meter readings recorded at engine start and shutdown.
fn migrate_add_odometer_columns(conn: &Connection) -> Result<(), Error> {
    let version = "20250610_0002_add_flight_odometers";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    for column in ["odometer_start", "odometer_end"] {
        if !has_column(conn, "flights", column)? {
            conn.execute(&format!("ALTER TABLE flights ADD COLUMN {column} REAL"), [])
                .map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!("Failed to add '{column}' column: {e}")),
                    )
                })?;
        }
    }

    mark_applied(conn, version, "Added odometer readings to flights")?;
    tracing::info!(version, "migration applied: odometer columns on flights");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "flights")? {
        create_flights_table(conn)?;
        tracing::debug!("created flights table");
    }

    if !table_exists(conn, "maintenance")? {
        create_maintenance_table(conn)?;
        tracing::debug!("created maintenance table");
    }

    migrate_add_odometer_columns(conn)?;

    Ok(())
}
