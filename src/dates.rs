use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Date format used everywhere in this pipeline ("15.12.2025").
pub const DATE_FMT: &str = "%d.%m.%Y";

/// Resolves which calendar dates are in scope for the current run.
///
/// POLICY:
/// - Monday: previous Friday, Saturday, Sunday and today (4 dates).
///   Listings are not checked over the weekend, so Monday runs
///   backfill the gap.
/// - Any other day: yesterday and today (2 dates).
///
/// CONTRACT:
/// - Pure function of `today`; no error conditions
/// - Order is stable: newest-to-oldest backfill, then today last
///   on Mondays; [yesterday, today] otherwise
///
pub fn resolve_target_dates(today: NaiveDate) -> Vec<String> {
    let days = if today.weekday() == Weekday::Mon {
        vec![
            today - Duration::days(1),
            today - Duration::days(2),
            today - Duration::days(3),
            today,
        ]
    } else {
        vec![today - Duration::days(1), today]
    };

    let dates: Vec<String> = days
        .iter()
        .map(|d| d.format(DATE_FMT).to_string())
        .collect();

    log::info!("Целевые даты для парсинга: {:?}", dates);
    dates
}
