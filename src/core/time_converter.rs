//! Conversion between stored UTC instants and the configured civil zone,
//! plus the textual forms exchanged with the store and the user.

use crate::errors::{AppError, AppResult};
use crate::models::civil::CivilDateTime;
use crate::models::instant::Instant;
use crate::models::zone::CivilZone;
use crate::utils::{date, time};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How to read stored text that carries no zone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetlessPolicy {
    /// Text is civil time in the configured zone (schedule fields).
    #[default]
    Civil,
    /// Text is UTC.
    Utc,
}

impl OffsetlessPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetlessPolicy::Civil => "civil",
            OffsetlessPolicy::Utc => "utc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPattern {
    DateOnly,
    TimeOnly,
    DateTimeShort,
    DateLong,
}

impl DisplayPattern {
    fn format_str(&self) -> &'static str {
        match self {
            DisplayPattern::DateOnly => "%Y-%m-%d",
            DisplayPattern::TimeOnly => "%H:%M",
            DisplayPattern::DateTimeShort => "%Y-%m-%d %H:%M",
            DisplayPattern::DateLong => "%A, %B %-d, %Y",
        }
    }
}

impl FromStr for DisplayPattern {
    type Err = AppError;

    /// Accepts `date-only`, `date_only`, `DateOnly` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match norm.as_str() {
            "dateonly" => Ok(DisplayPattern::DateOnly),
            "timeonly" => Ok(DisplayPattern::TimeOnly),
            "datetimeshort" => Ok(DisplayPattern::DateTimeShort),
            "datelong" => Ok(DisplayPattern::DateLong),
            _ => Err(AppError::UnsupportedPattern(s.to_string())),
        }
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone)]
pub struct TimeConverter {
    zone: CivilZone,
    offsetless: OffsetlessPolicy,
}

impl TimeConverter {
    pub fn new(zone: CivilZone, offsetless: OffsetlessPolicy) -> Self {
        Self { zone, offsetless }
    }

    pub fn zone(&self) -> &CivilZone {
        &self.zone
    }

    pub fn offsetless_policy(&self) -> OffsetlessPolicy {
        self.offsetless
    }

    fn offset_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.zone.offset.local_minus_utc() as i64)
    }

    pub fn to_civil(&self, instant: Instant) -> CivilDateTime {
        CivilDateTime::from_naive(instant.as_utc().naive_utc() + self.offset_delta())
    }

    pub fn to_instant(&self, civil: CivilDateTime) -> Instant {
        Instant::from_utc((civil.naive() - self.offset_delta()).and_utc())
    }

    /// Parse stored text using the configured offset-less policy.
    pub fn parse_stored(&self, text: &str) -> AppResult<Instant> {
        self.parse_stored_as(text, self.offsetless)
    }

    /// Parse stored text, resolving an offset-less value with `policy`.
    pub fn parse_stored_as(&self, text: &str, policy: OffsetlessPolicy) -> AppResult<Instant> {
        let t = text.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
            return Ok(Instant::from_utc(dt.with_timezone(&Utc)));
        }

        // `Z` with a shape RFC 3339 rejects, e.g. no seconds
        if let Some(body) = t.strip_suffix('Z').or_else(|| t.strip_suffix('z')) {
            return parse_naive(body)
                .map(|n| Instant::from_utc(n.and_utc()))
                .ok_or_else(|| AppError::MalformedTimestamp(text.to_string()));
        }

        let naive = parse_naive(t).ok_or_else(|| AppError::MalformedTimestamp(text.to_string()))?;

        Ok(match policy {
            OffsetlessPolicy::Utc => Instant::from_utc(naive.and_utc()),
            OffsetlessPolicy::Civil => self.to_instant(CivilDateTime::from_naive(naive)),
        })
    }

    /// Canonical stored form, always with the UTC designator.
    pub fn format_for_store(&self, instant: Instant) -> String {
        instant.as_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    pub fn format_for_display(&self, instant: Instant, pattern: DisplayPattern) -> String {
        self.format_civil(self.to_civil(instant), pattern)
    }

    /// Like `format_for_display`, with the pattern given by name.
    pub fn format_for_display_named(&self, instant: Instant, pattern: &str) -> AppResult<String> {
        let p: DisplayPattern = pattern.parse()?;
        Ok(self.format_for_display(instant, p))
    }

    pub fn format_civil(&self, civil: CivilDateTime, pattern: DisplayPattern) -> String {
        civil.naive().format(pattern.format_str()).to_string()
    }

    /// Parse user input: `YYYY-MM-DD` and `HH:MM` in the civil zone.
    pub fn parse_civil_input(&self, date_text: &str, time_text: &str) -> AppResult<CivilDateTime> {
        let d = date::parse_date(date_text)
            .ok_or_else(|| AppError::InvalidDate(date_text.to_string()))?;
        let t = time::parse_time(time_text)
            .ok_or_else(|| AppError::InvalidTime(time_text.to_string()))?;
        Ok(CivilDateTime::from_date_time(d, t))
    }

    pub fn now_civil(&self) -> CivilDateTime {
        self.to_civil(Instant::now())
    }

    pub fn today(&self) -> NaiveDate {
        self.now_civil().date()
    }
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}
