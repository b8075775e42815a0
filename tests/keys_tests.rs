use chrono::NaiveDate;
use heliops::errors::AppError;
use heliops::models::day_key::DayKey;
use heliops::models::month_key::MonthKey;

#[test]
fn test_day_key_parse_and_display() {
    let k = DayKey::parse("2025-08-05").unwrap();
    assert_eq!(k.to_string(), "2025-08-05");
    assert_eq!(k.to_date(), NaiveDate::from_ymd_opt(2025, 8, 5));
    assert!(DayKey::parse("2025-8-5x").is_err());

    let earlier = DayKey::parse("2025-07-31").unwrap();
    assert!(earlier < k);
}

#[test]
fn test_month_key_bounds() {
    let feb = MonthKey::parse("2024-02").unwrap();
    assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(feb.days_in_month(), 29);
    assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    assert!(!feb.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
}

#[test]
fn test_month_key_navigation() {
    let dec = MonthKey::new(2025, 12).unwrap();
    assert_eq!(dec.next().to_string(), "2026-01");
    assert_eq!(dec.next().prev(), dec);
    assert_eq!(MonthKey::new(2025, 1).unwrap().prev().to_string(), "2024-12");
}

#[test]
fn test_month_key_rejects_bad_input() {
    for bad in ["2025-13", "2025-00", "2025/08", "25-08", "2025-8"] {
        assert!(
            matches!(MonthKey::parse(bad), Err(AppError::InvalidMonthKey(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_month_key_saturates_at_the_ends_of_the_date_range() {
    let last = MonthKey::of(NaiveDate::MAX);
    assert_eq!(last.next(), last);
    assert_eq!(last.last_day(), NaiveDate::MAX);
    assert_eq!(last.days_in_month(), 31);
    assert!(last.prev() < last);

    let first = MonthKey::of(NaiveDate::MIN);
    assert_eq!(first.prev(), first);
    assert_eq!(first.first_day(), NaiveDate::MIN);
    assert!(first.next() > first);
}
