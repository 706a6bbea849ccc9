use chrono::{Duration, NaiveDate};
use holiday_countdown::HolidayPeriod;
use holiday_countdown::projection::project;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn countdown_to_first_upcoming_period() {
    let today = day(2025, 6, 1);
    let periods = vec![
        HolidayPeriod::from_start("A", today + Duration::days(5), 1),
        HolidayPeriod::from_start("B", today + Duration::days(20), 3),
    ];
    let projection = project(&periods, today).unwrap();
    assert_eq!(projection.countdown_days, 5);
    let current = projection.current.unwrap();
    assert_eq!(current.name, "A");
    assert_eq!(current.duration_days, 1);
    assert_eq!(projection.upcoming_name.as_deref(), Some("B"));
}

#[test]
fn period_starting_today_counts_as_zero() {
    let today = day(2025, 10, 1);
    let periods = vec![HolidayPeriod::from_start("国庆节", today, 7)];
    let projection = project(&periods, today).unwrap();
    assert_eq!(projection.countdown_days, 0);
    assert_eq!(projection.current.unwrap().name, "国庆节");
    assert_eq!(projection.upcoming_name, None);
}

#[test]
fn past_periods_are_never_selected() {
    let today = day(2025, 6, 1);
    let periods = vec![
        HolidayPeriod::from_start("劳动节", day(2025, 5, 1), 5),
        HolidayPeriod::from_start("端午节", day(2025, 6, 10), 3),
    ];
    let projection = project(&periods, today).unwrap();
    assert_eq!(projection.current.unwrap().name, "端午节");
    assert_eq!(projection.countdown_days, 9);
    assert_eq!(projection.upcoming_name, None);
}

#[test]
fn empty_list_reports_exhausted_year() {
    let projection = project(&[], day(2025, 6, 1)).unwrap();
    assert_eq!(projection.countdown_days, 0);
    assert!(projection.current.is_none());
    assert!(projection.upcoming_name.is_none());
}

#[test]
fn all_past_periods_report_exhausted_year() {
    let today = day(2025, 12, 31);
    let periods = vec![
        HolidayPeriod::from_start("元旦", day(2025, 1, 1), 1),
        HolidayPeriod::from_start("国庆节", day(2025, 10, 1), 7),
    ];
    let projection = project(&periods, today).unwrap();
    assert_eq!(projection.countdown_days, 0);
    assert!(projection.current.is_none());
    assert!(projection.upcoming_name.is_none());
}

#[test]
fn upcoming_skips_periods_sharing_the_start_date() {
    let today = day(2025, 6, 1);
    let periods = vec![
        HolidayPeriod::from_start("A", day(2025, 6, 6), 1),
        HolidayPeriod::from_start("B", day(2025, 6, 6), 1),
        HolidayPeriod::from_start("C", day(2025, 6, 11), 1),
    ];
    let projection = project(&periods, today).unwrap();
    assert_eq!(projection.current.unwrap().name, "A");
    // The follower must start strictly later, not merely be the next entry.
    assert_eq!(projection.upcoming_name.as_deref(), Some("C"));
}

#[test]
fn inconsistent_period_surfaces_as_error() {
    // Duration zero reconstructs to an empty member list.
    let periods = vec![HolidayPeriod::from_start("坏数据", day(2025, 6, 6), 0)];
    assert!(project(&periods, day(2025, 6, 1)).is_err());
}

#[test]
fn duration_member_mismatch_surfaces_as_error() {
    let mut period = HolidayPeriod::from_start("元旦", day(2025, 1, 1), 3);
    period.duration_days = 5;
    assert!(project(&[period], day(2024, 12, 1)).is_err());
}
