//! Unified application error type.
//! All modules (models, core, db, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Time handling
    // ---------------------------
    #[error("Malformed timestamp: '{0}'")]
    MalformedTimestamp(String),

    #[error("Unsupported display pattern: '{0}' (expected date-only, time-only, date-time-short or date-long)")]
    UnsupportedPattern(String),

    #[error("Invalid civil zone offset: '{0}' (expected ±HH:MM)")]
    InvalidZone(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month key: '{0}' (expected YYYY-MM)")]
    InvalidMonthKey(String),

    // ---------------------------
    // Flight records
    // ---------------------------
    #[error("Invalid odometer range: final reading {final_reading} is below initial reading {initial}")]
    InvalidOdometerRange { initial: f64, final_reading: f64 },

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("No {kind} found with id {id}")]
    EventNotFound { kind: String, id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
