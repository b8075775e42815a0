use chrono::{Datelike, NaiveDate, Weekday};
use heliops::core::calendar::grid::{CalendarGridBuilder, advance};
use heliops::models::calendar::{Direction, Granularity, WeekStart};
use heliops::models::civil::CivilDateTime;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_month_grid_sunday_start() {
    let builder = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Sunday);
    let cells = builder.build(d(2025, 8, 15), Granularity::Month);

    // Aug 1 2025 is a Friday: 5 leading days, 6 rows
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0].date, d(2025, 7, 27));
    assert_eq!(cells[0].date.weekday(), Weekday::Sun);
    assert!(!cells[0].in_current_period);
    assert_eq!(cells[5].date, d(2025, 8, 1));
    assert!(cells[5].in_current_period);

    assert_eq!(cells.iter().filter(|c| c.in_current_period).count(), 31);
    assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    assert!(cells.iter().find(|c| c.is_today).unwrap().date == d(2025, 8, 15));
}

#[test]
fn test_month_grid_monday_start() {
    let builder = CalendarGridBuilder::new(d(2025, 1, 1), WeekStart::Monday);
    let cells = builder.build_month_grid(d(2025, 8, 20));

    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0].date, d(2025, 7, 28));
    assert_eq!(cells[0].date.weekday(), Weekday::Mon);
    assert_eq!(cells[34].date, d(2025, 8, 31));
    assert!(cells.iter().all(|c| !c.is_today));
}

#[test]
fn test_month_grid_exact_four_weeks() {
    // Feb 2026 starts on a Sunday and has 28 days
    let builder = CalendarGridBuilder::new(d(2026, 2, 1), WeekStart::Sunday);
    let cells = builder.build_month_grid(d(2026, 2, 10));

    assert_eq!(cells.len(), 28);
    assert!(cells.iter().all(|c| c.in_current_period));
}

#[test]
fn test_month_grid_is_whole_weeks_with_all_days() {
    let builder = CalendarGridBuilder::new(d(2025, 1, 1), WeekStart::Sunday);
    for month in 1..=12 {
        let cells = builder.build_month_grid(d(2024, month, 1));
        assert_eq!(cells.len() % 7, 0);

        let in_period: Vec<NaiveDate> = cells
            .iter()
            .filter(|c| c.in_current_period)
            .map(|c| c.date)
            .collect();
        assert_eq!(in_period.first().unwrap().day(), 1);
        assert!(in_period.iter().all(|x| x.month() == month));
        assert!(in_period.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    // leap February
    let feb = builder.build_month_grid(d(2024, 2, 1));
    assert_eq!(feb.iter().filter(|c| c.in_current_period).count(), 29);
}

#[test]
fn test_week_grid() {
    let sunday = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Sunday);
    let cells = sunday.build(d(2025, 8, 15), Granularity::Week);
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0].date, d(2025, 8, 10));
    assert!(cells.iter().all(|c| c.in_current_period));

    let monday = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Monday);
    let cells = monday.build(d(2025, 8, 15), Granularity::Week);
    assert_eq!(cells[0].date, d(2025, 8, 11));
    assert_eq!(cells[6].date, d(2025, 8, 17));
}

#[test]
fn test_day_grid() {
    let builder = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Sunday);
    let cells = builder.build(d(2025, 8, 15), Granularity::Day);
    assert_eq!(cells.len(), 1);
    assert!(cells[0].in_current_period);
    assert!(cells[0].is_today);
}

#[test]
fn test_period_bounds() {
    let builder = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Sunday);
    assert_eq!(
        builder.period_bounds(d(2025, 8, 15), Granularity::Month),
        (d(2025, 8, 1), d(2025, 8, 31))
    );
    assert_eq!(
        builder.period_bounds(d(2025, 8, 1), Granularity::Week),
        (d(2025, 7, 27), d(2025, 8, 2))
    );
    assert_eq!(
        builder.period_bounds(d(2025, 8, 15), Granularity::Day),
        (d(2025, 8, 15), d(2025, 8, 15))
    );
}

#[test]
fn test_advance_month_lands_on_first() {
    let jan31 = CivilDateTime::new(2025, 1, 31, 10, 0).unwrap();
    let next = advance(jan31, Granularity::Month, Direction::Forward);
    assert_eq!(next, CivilDateTime::new(2025, 2, 1, 10, 0).unwrap());

    let mar31 = CivilDateTime::new(2025, 3, 31, 8, 45).unwrap();
    let prev = advance(mar31, Granularity::Month, Direction::Backward);
    assert_eq!(prev, CivilDateTime::new(2025, 2, 1, 8, 45).unwrap());

    let dec = CivilDateTime::new(2025, 12, 15, 0, 0).unwrap();
    let jan = advance(dec, Granularity::Month, Direction::Forward);
    assert_eq!(jan, CivilDateTime::new(2026, 1, 1, 0, 0).unwrap());
}

#[test]
fn test_advance_week_and_day() {
    let r = CivilDateTime::new(2025, 8, 1, 12, 0).unwrap();
    assert_eq!(
        advance(r, Granularity::Week, Direction::Backward),
        CivilDateTime::new(2025, 7, 25, 12, 0).unwrap()
    );
    assert_eq!(
        advance(r, Granularity::Day, Direction::Backward),
        CivilDateTime::new(2025, 7, 31, 12, 0).unwrap()
    );
    assert_eq!(
        advance(r, Granularity::Day, Direction::Forward),
        CivilDateTime::new(2025, 8, 2, 12, 0).unwrap()
    );
}

#[test]
fn test_grids_at_the_ends_of_the_date_range() {
    let builder = CalendarGridBuilder::new(d(2025, 8, 15), WeekStart::Sunday);

    let last = builder.build_month_grid(NaiveDate::MAX);
    assert_eq!(last.iter().filter(|c| c.in_current_period).count(), 31);
    assert_eq!(last.last().unwrap().date, NaiveDate::MAX);
    assert!(last.windows(2).all(|w| w[1].date == w[0].date.succ_opt().unwrap()));

    let first = builder.build_month_grid(NaiveDate::MIN);
    assert_eq!(first.iter().filter(|c| c.in_current_period).count(), 31);
    assert_eq!(first[0].date, NaiveDate::MIN);

    let week = builder.build_week_grid(NaiveDate::MAX);
    assert!(!week.is_empty() && week.len() <= 7);
    assert_eq!(week.last().unwrap().date, NaiveDate::MAX);

    let (_, end) = builder.period_bounds(NaiveDate::MAX, Granularity::Week);
    assert_eq!(end, NaiveDate::MAX);
}

#[test]
fn test_advance_stops_at_the_ends_of_the_date_range() {
    let last = CivilDateTime::from_date(NaiveDate::MAX);
    assert_eq!(advance(last, Granularity::Month, Direction::Forward), last);
    assert_eq!(advance(last, Granularity::Week, Direction::Forward), last);
    assert_eq!(advance(last, Granularity::Day, Direction::Forward), last);
    assert_ne!(advance(last, Granularity::Day, Direction::Backward), last);

    let first = CivilDateTime::from_date(NaiveDate::MIN);
    assert_eq!(advance(first, Granularity::Month, Direction::Backward), first);
    assert_eq!(advance(first, Granularity::Day, Direction::Backward), first);
}
