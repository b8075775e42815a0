//! The single civil zone used for display and input.

use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, Offset, Utc};
use std::fmt;

/// Named fixed-offset zone. A fixed offset has no DST transitions, so every
/// civil time maps to exactly one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilZone {
    pub name: String,
    pub offset: FixedOffset,
}

impl CivilZone {
    pub fn new(name: &str, offset: FixedOffset) -> Self {
        Self {
            name: name.to_string(),
            offset,
        }
    }

    pub fn utc() -> Self {
        Self::new("UTC", Utc.fix())
    }

    /// Parse a zone from its name and a `±HH:MM` offset (`Z` and `UTC` are accepted too).
    pub fn parse(name: &str, offset: &str) -> AppResult<Self> {
        Ok(Self::new(name, parse_offset(offset)?))
    }

    /// Offset formatted as `±HH:MM`.
    pub fn offset_str(&self) -> String {
        let secs = self.offset.local_minus_utc();
        let sign = if secs < 0 { '-' } else { '+' };
        let mins = secs.abs() / 60;
        format!("{}{:02}:{:02}", sign, mins / 60, mins % 60)
    }
}

impl fmt::Display for CivilZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (UTC{})", self.name, self.offset_str())
    }
}

pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = match t.chars().next() {
        Some('+') => (1, &t[1..]),
        Some('-') => (-1, &t[1..]),
        _ => return Err(AppError::InvalidZone(s.to_string())),
    };

    let (h, m) = rest
        .split_once(':')
        .ok_or_else(|| AppError::InvalidZone(s.to_string()))?;
    if h.len() != 2 || m.len() != 2 {
        return Err(AppError::InvalidZone(s.to_string()));
    }

    let hours: i32 = h.parse().map_err(|_| AppError::InvalidZone(s.to_string()))?;
    let minutes: i32 = m.parse().map_err(|_| AppError::InvalidZone(s.to_string()))?;
    if hours > 14 || minutes > 59 {
        return Err(AppError::InvalidZone(s.to_string()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::InvalidZone(s.to_string()))
}
