use chrono::{TimeZone, Utc};
use heliops::core::time_converter::{DisplayPattern, OffsetlessPolicy, TimeConverter};
use heliops::errors::AppError;
use heliops::models::civil::CivilDateTime;
use heliops::models::instant::Instant;
use heliops::models::zone::{CivilZone, parse_offset};

fn honolulu() -> TimeConverter {
    let zone = CivilZone::parse("Pacific/Honolulu", "-10:00").expect("zone");
    TimeConverter::new(zone, OffsetlessPolicy::Civil)
}

fn utc_instant(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
    Instant::from_utc(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
}

#[test]
fn test_to_civil_crosses_date_line_backwards() {
    let conv = honolulu();
    let civil = conv.to_civil(utc_instant(2025, 8, 16, 9, 30));
    assert_eq!(civil, CivilDateTime::new(2025, 8, 15, 23, 30).unwrap());
    assert_eq!(civil.day_key().to_string(), "2025-08-15");
}

#[test]
fn test_store_roundtrip_is_exact() {
    let conv = honolulu();
    for i in [
        utc_instant(2025, 1, 1, 0, 0),
        utc_instant(2025, 8, 16, 9, 30),
        utc_instant(2024, 2, 29, 23, 59),
    ] {
        let text = conv.format_for_store(i);
        assert!(text.ends_with('Z'), "stored form must carry Z: {text}");
        assert_eq!(conv.parse_stored(&text).unwrap(), i);
    }
}

fn zone(offset: &str) -> TimeConverter {
    TimeConverter::new(CivilZone::parse("test", offset).expect("zone"), OffsetlessPolicy::Civil)
}

#[test]
fn test_civil_roundtrip_is_exact() {
    // Values at day, month, year and leap-day edges: in every zone below,
    // at least one of them lands on a different UTC date.
    let civil = [
        (2025, 12, 31, 22, 15),
        (2025, 12, 31, 23, 59),
        (2026, 1, 1, 0, 0),
        (2024, 2, 28, 23, 59),
        (2024, 2, 29, 0, 0),
        (2024, 2, 29, 23, 59),
        (2024, 3, 1, 0, 0),
        (2025, 7, 31, 23, 59),
        (2025, 8, 1, 0, 0),
    ];

    for offset in ["-10:00", "+14:00", "+05:30", "-03:30", "+00:00"] {
        let conv = zone(offset);
        for (y, m, d, h, min) in civil {
            let c = CivilDateTime::new(y, m, d, h, min).unwrap();
            assert_eq!(conv.to_civil(conv.to_instant(c)), c, "{c} in {offset}");
        }
    }
}

#[test]
fn test_instant_roundtrip_across_boundaries() {
    let instants = [
        utc_instant(2025, 12, 31, 9, 59),
        utc_instant(2025, 12, 31, 10, 0),
        utc_instant(2025, 12, 31, 18, 30),
        utc_instant(2026, 1, 1, 0, 0),
        utc_instant(2024, 2, 28, 10, 0),
        utc_instant(2024, 2, 29, 23, 59),
        utc_instant(2024, 3, 1, 0, 0),
    ];

    for offset in ["-10:00", "+14:00", "+05:30"] {
        let conv = zone(offset);
        for i in instants {
            assert_eq!(conv.to_instant(conv.to_civil(i)), i, "{offset}");
        }
    }
}

#[test]
fn test_positive_offsets_move_civil_date_forward() {
    // Kiribati is fourteen hours ahead: 10:00 UTC on New Year's Eve is already
    // midnight of the new year.
    let kiritimati = zone("+14:00");
    assert_eq!(
        kiritimati.to_civil(utc_instant(2025, 12, 31, 10, 0)),
        CivilDateTime::new(2026, 1, 1, 0, 0).unwrap()
    );

    // Half-hour offset across the leap day.
    let india = zone("+05:30");
    assert_eq!(
        india.to_civil(utc_instant(2024, 2, 28, 18, 30)),
        CivilDateTime::new(2024, 2, 29, 0, 0).unwrap()
    );
    assert_eq!(
        india.to_civil(utc_instant(2024, 2, 29, 18, 29)),
        CivilDateTime::new(2024, 2, 29, 23, 59).unwrap()
    );

    // And backwards: midnight civil on March 1st is still February in UTC.
    assert_eq!(
        india.format_for_store(india.to_instant(CivilDateTime::new(2024, 3, 1, 0, 0).unwrap())),
        "2024-02-29T18:30:00Z"
    );
}

#[test]
fn test_offsetless_text_follows_policy() {
    let conv = honolulu();

    let civil = conv.parse_stored("2025-08-15 23:30").unwrap();
    assert_eq!(conv.format_for_store(civil), "2025-08-16T09:30:00Z");

    let utc = conv
        .parse_stored_as("2025-08-15T23:30:00", OffsetlessPolicy::Utc)
        .unwrap();
    assert_eq!(conv.format_for_store(utc), "2025-08-15T23:30:00Z");
}

#[test]
fn test_explicit_offsets_are_honoured() {
    let conv = honolulu();
    let a = conv.parse_stored("2025-08-15T23:30:00-10:00").unwrap();
    let b = conv.parse_stored("2025-08-16T09:30Z").unwrap();
    let c = conv.parse_stored("2025-08-16T11:30:00+02:00").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_seconds_are_dropped() {
    let conv = honolulu();
    let i = conv.parse_stored("2025-08-16T09:30:45.250Z").unwrap();
    assert_eq!(i, utc_instant(2025, 8, 16, 9, 30));
}

#[test]
fn test_malformed_timestamp_is_rejected() {
    let conv = honolulu();
    for bad in ["", "yesterday", "2025-13-01T00:00:00Z", "2025-08-15"] {
        let err = conv.parse_stored(bad).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)), "{bad}: {err}");
    }
}

#[test]
fn test_display_patterns() {
    let conv = honolulu();
    let i = utc_instant(2025, 8, 16, 9, 30);

    assert_eq!(conv.format_for_display(i, DisplayPattern::DateOnly), "2025-08-15");
    assert_eq!(conv.format_for_display(i, DisplayPattern::TimeOnly), "23:30");
    assert_eq!(
        conv.format_for_display(i, DisplayPattern::DateTimeShort),
        "2025-08-15 23:30"
    );
    assert_eq!(
        conv.format_for_display(i, DisplayPattern::DateLong),
        "Friday, August 15, 2025"
    );
    assert_eq!(conv.format_for_display_named(i, "time_only").unwrap(), "23:30");
}

#[test]
fn test_unknown_display_pattern() {
    let conv = honolulu();
    let err = conv
        .format_for_display_named(utc_instant(2025, 8, 16, 9, 30), "iso-week")
        .unwrap_err();
    assert!(matches!(err, AppError::UnsupportedPattern(_)));
}

#[test]
fn test_parse_civil_input() {
    let conv = honolulu();
    let c = conv.parse_civil_input("2025-08-31", "19:00").unwrap();
    assert_eq!(conv.format_for_store(conv.to_instant(c)), "2025-09-01T05:00:00Z");

    assert!(matches!(
        conv.parse_civil_input("2025-02-30", "10:00").unwrap_err(),
        AppError::InvalidDate(_)
    ));
    assert!(matches!(
        conv.parse_civil_input("2025-02-10", "25:00").unwrap_err(),
        AppError::InvalidTime(_)
    ));
}

#[test]
fn test_parse_offset() {
    assert_eq!(parse_offset("-10:00").unwrap().local_minus_utc(), -36_000);
    assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 19_800);
    assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
    for bad in ["10:00", "+15:00", "+5:00", "-10"] {
        assert!(parse_offset(bad).is_err(), "{bad}");
    }
}
