use chrono::NaiveDate;
use metal_lead_collector::dates::resolve_target_dates;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekday_runs_cover_yesterday_and_today() {
    // 2025-12-17 is a Wednesday
    let dates = resolve_target_dates(date(2025, 12, 17));
    assert_eq!(dates, vec!["16.12.2025", "17.12.2025"]);
}

#[test]
fn tuesday_after_monday_does_not_backfill() {
    let dates = resolve_target_dates(date(2025, 12, 16));
    assert_eq!(dates, vec!["15.12.2025", "16.12.2025"]);
}

#[test]
fn monday_runs_backfill_the_weekend() {
    // 2025-12-15 is a Monday: Sunday, Saturday, Friday, then today
    let dates = resolve_target_dates(date(2025, 12, 15));
    assert_eq!(
        dates,
        vec!["14.12.2025", "13.12.2025", "12.12.2025", "15.12.2025"]
    );
}

#[test]
fn month_boundaries_are_handled() {
    // 2026-03-02 is a Monday; backfill reaches into February
    let dates = resolve_target_dates(date(2026, 3, 2));
    assert_eq!(
        dates,
        vec!["01.03.2026", "28.02.2026", "27.02.2026", "02.03.2026"]
    );
}
