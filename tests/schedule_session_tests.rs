use chrono::NaiveDate;
use heliops::core::add::{AddLogic, FlightDraft};
use heliops::core::schedule::session::{CommitOutcome, MonthSchedule, ScheduleSession};
use heliops::core::schedule::span::load_span;
use heliops::core::time_converter::{OffsetlessPolicy, TimeConverter};
use heliops::db::pool::DbPool;
use heliops::db::store::SqliteStore;
use heliops::errors::{AppError, AppResult};
use heliops::models::event::RawEventRecord;
use heliops::models::month_key::MonthKey;
use heliops::models::zone::CivilZone;
use heliops::store::EventStore;
use std::collections::HashMap;

fn honolulu() -> TimeConverter {
    TimeConverter::new(
        CivilZone::parse("Pacific/Honolulu", "-10:00").unwrap(),
        OffsetlessPolicy::Civil,
    )
}

fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

fn flight(id: i64, start: &str) -> RawEventRecord {
    RawEventRecord {
        id,
        kind: "flight".into(),
        start: start.into(),
        resource_id: "N350HX".into(),
        status: "scheduled".into(),
        title: format!("Flight {id}"),
        ..Default::default()
    }
}

/// In-memory store keyed by month; resource queries scan everything.
#[derive(Default)]
struct FakeStore {
    months: HashMap<MonthKey, Vec<RawEventRecord>>,
}

impl EventStore for FakeStore {
    fn fetch_events_for_month(&self, month: MonthKey) -> AppResult<Vec<RawEventRecord>> {
        Ok(self.months.get(&month).cloned().unwrap_or_default())
    }

    fn fetch_events_for_resource(
        &self,
        resource_id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<RawEventRecord>> {
        Ok(self
            .months
            .values()
            .flatten()
            .filter(|r| r.resource_id == resource_id)
            .cloned()
            .collect())
    }
}

#[test]
fn test_last_request_wins() {
    let mut session = ScheduleSession::new(honolulu());
    let july = month(2025, 7);
    let august = month(2025, 8);

    let t_july = session.begin(july);
    let t_august = session.begin(august);

    let outcome = session
        .commit(t_july, Ok(vec![flight(1, "2025-07-10T20:00:00Z")]))
        .unwrap();
    assert_eq!(
        outcome,
        CommitOutcome::StaleResponseDiscarded {
            requested: july,
            selected: august
        }
    );
    assert!(session.current().is_none());
    assert!(session.is_pending());

    let outcome = session
        .commit(t_august, Ok(vec![flight(2, "2025-08-10T20:00:00Z")]))
        .unwrap();
    assert_eq!(
        outcome,
        CommitOutcome::Applied {
            month: august,
            events: 1,
            skipped: 0
        }
    );
    assert!(!session.is_pending());
    assert_eq!(session.current().unwrap().month(), august);
    assert_eq!(session.current().unwrap().events()[0].id, 2);
    assert_eq!(session.summary(august).unwrap().flight_count, 1);
    assert!(session.summary(july).is_none());
}

#[test]
fn test_late_response_does_not_replace_newer_month() {
    let mut session = ScheduleSession::new(honolulu());
    let t_july = session.begin(month(2025, 7));
    let t_august = session.begin(month(2025, 8));

    session
        .commit(t_august, Ok(vec![flight(2, "2025-08-10T20:00:00Z")]))
        .unwrap();
    let late = session
        .commit(t_july, Ok(vec![flight(1, "2025-07-10T20:00:00Z")]))
        .unwrap();

    assert!(matches!(late, CommitOutcome::StaleResponseDiscarded { .. }));
    assert_eq!(session.current().unwrap().month(), month(2025, 8));
}

#[test]
fn test_reselecting_same_month_invalidates_older_ticket() {
    let mut session = ScheduleSession::new(honolulu());
    let first = session.begin(month(2025, 8));
    let second = session.begin(month(2025, 8));

    assert!(matches!(
        session.commit(first, Ok(vec![])).unwrap(),
        CommitOutcome::StaleResponseDiscarded { .. }
    ));
    assert!(matches!(
        session.commit(second, Ok(vec![])).unwrap(),
        CommitOutcome::Applied { events: 0, .. }
    ));
}

#[test]
fn test_failed_fetch_keeps_displayed_month() {
    let mut session = ScheduleSession::new(honolulu());
    let t = session.begin(month(2025, 7));
    session
        .commit(t, Ok(vec![flight(1, "2025-07-10T20:00:00Z")]))
        .unwrap();

    let t = session.begin(month(2025, 8));
    let err = session
        .commit(t, Err(AppError::Other("connection reset".into())))
        .unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
    assert_eq!(session.current().unwrap().month(), month(2025, 7));

    // a stale failure is simply discarded
    let stale = session.begin(month(2025, 9));
    session.begin(month(2025, 10));
    assert!(matches!(
        session.commit(stale, Err(AppError::Other("timeout".into()))),
        Ok(CommitOutcome::StaleResponseDiscarded { .. })
    ));
}

#[test]
fn test_month_schedule_trims_neighbours_and_skips_bad_rows() {
    let conv = honolulu();
    let rows = vec![
        flight(1, "2025-08-01T19:00:00Z"),
        // Sep 1 02:00 in Honolulu
        flight(2, "2025-09-01T12:00:00Z"),
        // Aug 31 19:00 in Honolulu, already Sep 1 in UTC
        flight(3, "2025-09-01T05:00:00Z"),
        flight(4, "31/08/2025 10:00"),
    ];

    let schedule = MonthSchedule::from_records(month(2025, 8), &rows, &conv);
    let ids: Vec<i64> = schedule.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(schedule.outside_month(), 1);
    assert_eq!(schedule.skipped().len(), 1);
    assert_eq!(schedule.summary().flight_count, 2);
}

#[test]
fn test_unreadable_rows_from_fetch_slack_are_not_reported() {
    let conv = honolulu();
    let mut glider = flight(8, "2025-09-01T05:00:00Z"); // Aug 31 19:00 civil
    glider.kind = "glider".into();

    let rows = vec![
        flight(1, "2025-08-10T20:00:00Z"),
        // slack days returned by a widened fetch
        flight(5, "2025-07-31T25:00"),
        flight(6, "2025-09-01 99:99"),
        // unreadable rows of August itself
        flight(7, "2025-08-15Tnoon"),
        glider,
        flight(9, "sometime in August"),
    ];

    let schedule = MonthSchedule::from_records(month(2025, 8), &rows, &conv);
    let mut skipped: Vec<i64> = schedule.skipped().iter().map(|s| s.id).collect();
    skipped.sort();
    assert_eq!(skipped, vec![7, 8, 9]);
    assert_eq!(schedule.outside_month(), 2);
    assert_eq!(schedule.events().len(), 1);

    let mut store = FakeStore::default();
    store.months.insert(month(2025, 8), rows);
    let mut session = ScheduleSession::new(conv);
    assert!(matches!(
        session.load(&store, month(2025, 8)).unwrap(),
        CommitOutcome::Applied {
            events: 1,
            skipped: 3,
            ..
        }
    ));
}

#[test]
fn test_load_through_store() {
    let mut store = FakeStore::default();
    store
        .months
        .insert(month(2025, 8), vec![flight(1, "2025-08-05T20:00:00Z")]);

    let mut session = ScheduleSession::new(honolulu());
    let outcome = session.load(&store, month(2025, 8)).unwrap();
    assert!(matches!(outcome, CommitOutcome::Applied { events: 1, .. }));

    let outcome = session.load(&store, month(2025, 9)).unwrap();
    assert!(matches!(outcome, CommitOutcome::Applied { events: 0, .. }));
    assert_eq!(session.selected_month(), Some(month(2025, 9)));
}

#[test]
fn test_span_across_months() {
    let mut store = FakeStore::default();
    // both fetches return the boundary row, as a widened store query would
    let boundary = flight(2, "2025-08-01T05:00:00Z"); // Jul 31 19:00 civil
    store.months.insert(
        month(2025, 7),
        vec![flight(1, "2025-07-29T20:00:00Z"), boundary.clone()],
    );
    store.months.insert(
        month(2025, 8),
        vec![boundary, flight(3, "2025-08-02T20:00:00Z")],
    );

    let conv = honolulu();
    let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();

    let span = load_span(&store, &conv, d(7, 27), d(8, 2), None).unwrap();
    let ids: Vec<i64> = span.events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(span.skipped, 0);

    let span = load_span(&store, &conv, d(7, 29), d(7, 29), Some("N350HX")).unwrap();
    assert_eq!(span.events.len(), 1);

    assert!(load_span(&store, &conv, d(8, 2), d(7, 27), None)
        .unwrap()
        .events
        .is_empty());
}

#[test]
fn test_sqlite_month_fetch_covers_zone_offset() {
    let mut pool = DbPool::in_memory().unwrap();
    let conv = honolulu();

    let draft = FlightDraft {
        date: "2025-08-31".into(),
        start: "19:00".into(),
        end: Some("20:30".into()),
        aircraft: "N350HX".into(),
        pilot: Some("Kai".into()),
        title: "Sunset tour".into(),
        status: "scheduled".into(),
        odometer_start: None,
        odometer_end: None,
    };
    AddLogic::add_flight(&mut pool, &conv, &draft).unwrap();

    let store = SqliteStore::new(&pool);
    let raw = store.fetch_events_for_month(month(2025, 8)).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].start, "2025-09-01T05:00:00Z");

    let mut session = ScheduleSession::new(conv);
    session.load(&store, month(2025, 8)).unwrap();
    let schedule = session.current().unwrap();
    assert_eq!(schedule.events().len(), 1);
    assert_eq!(schedule.events()[0].scheduled_minutes(), Some(90));

    session.load(&store, month(2025, 9)).unwrap();
    assert!(session.current().unwrap().events().is_empty());
}
