use chrono::{NaiveTime, TimeZone, Utc};
use heliops::core::calculator::duration::{
    elapsed_minutes_between, elapsed_minutes_wrapping, flight_time, flight_time_from_odometers,
    run_time_label,
};
use heliops::errors::AppError;
use heliops::models::civil::CivilDateTime;
use heliops::models::event::{EventKind, ScheduledEvent};
use heliops::models::instant::Instant;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn flight(start_h: u32, end_h: Option<(u32, u32)>, odo: Option<(f64, f64)>) -> ScheduledEvent {
    let at = |h: u32, m: u32| Instant::from_utc(Utc.with_ymd_and_hms(2025, 8, 1, h, m, 0).unwrap());
    ScheduledEvent {
        id: 1,
        kind: EventKind::Flight,
        start: at(start_h, 0),
        end: end_h.map(|(h, m)| at(h, m)),
        resource_id: "N350HX".into(),
        status_tag: "completed".into(),
        title: "Tour".into(),
        participant: None,
        odometer_start: odo.map(|o| o.0),
        odometer_end: odo.map(|o| o.1),
    }
}

#[test]
fn test_wrapping_duration() {
    assert_eq!(elapsed_minutes_wrapping(t("09:00"), t("11:30")), 150);
    assert_eq!(elapsed_minutes_wrapping(t("23:30"), t("00:15")), 45);
    assert_eq!(elapsed_minutes_wrapping(t("10:00"), t("10:00")), 0);
    assert_eq!(elapsed_minutes_wrapping(t("00:01"), t("00:00")), 24 * 60 - 1);
}

#[test]
fn test_duration_between_full_datetimes() {
    let a = CivilDateTime::new(2025, 8, 15, 23, 30).unwrap();
    let b = CivilDateTime::new(2025, 8, 16, 0, 15).unwrap();
    assert_eq!(elapsed_minutes_between(&a, &b), 45);
    assert_eq!(elapsed_minutes_between(&b, &a), -45);

    let c = CivilDateTime::new(2025, 8, 17, 0, 15).unwrap();
    assert_eq!(elapsed_minutes_between(&a, &c), 24 * 60 + 45);
}

#[test]
fn test_odometer_flight_time() {
    assert_eq!(flight_time_from_odometers(100.0, 102.5).unwrap(), 2.5);
    assert_eq!(flight_time_from_odometers(1234.56, 1236.04).unwrap(), 1.5);
    assert_eq!(flight_time_from_odometers(50.0, 50.0).unwrap(), 0.0);
}

#[test]
fn test_odometer_invalid_range() {
    let err = flight_time_from_odometers(102.5, 100.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidOdometerRange { .. }));

    assert!(flight_time_from_odometers(f64::NAN, 1.0).is_err());
    assert!(flight_time_from_odometers(1.0, f64::INFINITY).is_err());
}

#[test]
fn test_run_time_label() {
    assert_eq!(run_time_label(65), "1:05");
    assert_eq!(run_time_label(0), "0:00");
    assert_eq!(run_time_label(600), "10:00");
    assert_eq!(run_time_label(-5), "-0:05");
}

#[test]
fn test_flight_time_prefers_odometers() {
    let ev = flight(9, Some((12, 0)), Some((100.0, 102.5)));
    assert_eq!(flight_time(&ev), Some(2.5));

    let ev = flight(9, Some((11, 30)), None);
    assert_eq!(flight_time(&ev), Some(2.5));

    // inconsistent readings fall back to the schedule
    let ev = flight(9, Some((10, 0)), Some((5.0, 4.0)));
    assert_eq!(flight_time(&ev), Some(1.0));

    let ev = flight(9, None, None);
    assert_eq!(flight_time(&ev), None);
}
