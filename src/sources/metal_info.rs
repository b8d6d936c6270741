use std::sync::atomic::Ordering;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use tokio::time::sleep;

use crate::{
    browser::{Element, Page, PageError},
    dates::DATE_FMT,
    metrics::METRICS,
    schema::{
        LeadStatus, TradeLeadRecord, COMPANY_UNSPECIFIED, REGION_UNSPECIFIED,
        VOLUME_UNSPECIFIED,
    },
};

use super::adapter::SourceAdapter;

/// metalinfo.ru bulletin board adapter
///
/// Flat list where date separators and bulletin items are
/// interleaved siblings:
///
///   li.row.date      — "15 декабря" (genitive month name, no year)
///   li.row.bulletin  — one lead
///   li.description   — optional free-text volume for the lead above
///
/// DESIGN:
/// - Running date cursor; bulletins are only emitted while the
///   cursor points at a target date
/// - One-item lookahead for the description row
pub struct MetalInfoAdapter;

const BASE_URL: &str = "https://www.metalinfo.ru/ru/board";

/// Pages of the category-filtered listing checked per run.
const MAX_PAGES: usize = 5;

const NAV_TIMEOUT: Duration = Duration::from_secs(20);
const LIST_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Trust score for this source. The list structure is looser than
/// a table, so extraction is less reliable.
const CONFIDENCE: u8 = 55;

/// Genitive Russian month names, as they appear in the board's
/// date separators.
const MONTHS_RU: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

#[async_trait::async_trait]
impl SourceAdapter for MetalInfoAdapter {
    fn name(&self) -> &'static str {
        "metalinfo"
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    async fn scrape(
        &self,
        page: &mut dyn Page,
        target_dates: &[String],
    ) -> Vec<TradeLeadRecord> {
        let patterns = date_patterns(target_dates);
        let mut events = Vec::new();

        // Cursor survives page boundaries: a date section can run
        // across a pagination break.
        let mut current_target_date: Option<String> = None;

        log::info!("--- MetalInfo: Начало парсинга ---");

        for page_num in 1..=MAX_PAGES {
            let url = format!("{BASE_URL}?category=b&page={page_num}");

            if let Err(e) = fetch_board(page, &url).await {
                METRICS.page_errors.fetch_add(1, Ordering::Relaxed);
                log::error!("MetalInfo ошибка: {e}");
                break;
            }
            METRICS.pages_fetched.fetch_add(1, Ordering::Relaxed);

            let items = page.query("#bulletinList > li");
            METRICS
                .rows_scanned
                .fetch_add(items.len() as u64, Ordering::Relaxed);

            for (i, item) in items.iter().enumerate() {
                let class = item.attr("class").unwrap_or("");

                if class.contains("row date") {
                    // Unrecognized separators clear the cursor, so
                    // everything until the next known date is dropped.
                    current_target_date = match_separator(item.text(), &patterns);
                } else if class.contains("row bulletin") {
                    let Some(date) = current_target_date.as_deref() else {
                        continue;
                    };
                    if let Some(event) = extract_bulletin(item, items.get(i + 1), date) {
                        events.push(event);
                    }
                }
            }

            sleep(PAGE_DELAY).await;
        }

        events
    }
}

async fn fetch_board(page: &mut dyn Page, url: &str) -> Result<(), PageError> {
    page.navigate(url, NAV_TIMEOUT).await?;
    page.wait_for_selector("#bulletinList > li", LIST_TIMEOUT).await?;
    Ok(())
}

/// Pre-translates target dates into the board's textual form.
///
/// "15.12.2025" becomes ("15 декабря", "15.12.2025") — day without
/// a leading zero, genitive month, no year. Matching is substring
/// based because separators carry extra text ("15 декабря, пятница").
fn date_patterns(target_dates: &[String]) -> Vec<(String, String)> {
    target_dates
        .iter()
        .filter_map(|d| {
            let date = NaiveDate::parse_from_str(d, DATE_FMT).ok()?;
            let month = MONTHS_RU[date.month0() as usize];
            Some((format!("{} {}", date.day(), month), d.clone()))
        })
        .collect()
}

/// Maps a date separator's text onto a canonical target date, or
/// `None` if it names a date outside the window.
fn match_separator(text: &str, patterns: &[(String, String)]) -> Option<String> {
    patterns
        .iter()
        .find(|(pattern, _)| text.contains(pattern.as_str()))
        .map(|(_, date)| date.clone())
}

/// Extracts one bulletin item.
///
/// Title and time are required sub-elements; an item missing either
/// is malformed and skipped. Company and region fall back to the
/// schema sentinels. Volume comes from the immediately following
/// description row when there is one.
fn extract_bulletin(
    item: &Element,
    next: Option<&Element>,
    date: &str,
) -> Option<TradeLeadRecord> {
    let product = sub_text(item, "span.title a")?;
    let event_time = sub_text(item, "span.time")?;

    let company = sub_text(item, "span.company")
        .unwrap_or_else(|| COMPANY_UNSPECIFIED.to_string());
    let region = sub_text(item, "span.region")
        .unwrap_or_else(|| REGION_UNSPECIFIED.to_string());

    let volume = next
        .filter(|el| el.attr("class").unwrap_or("").contains("description"))
        .map(|el| el.text().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| VOLUME_UNSPECIFIED.to_string());

    Some(TradeLeadRecord {
        id: 0,
        product,
        company,
        region,
        volume,
        event_date: format!("{date} {event_time}"),
        status: LeadStatus::Potential,
        confidence: CONFIDENCE,
        source: BASE_URL.to_string(),
    })
}

fn sub_text(item: &Element, selector: &str) -> Option<String> {
    let text = item.select_first(selector)?.text().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_drop_leading_zero_and_use_genitive_month() {
        let patterns =
            date_patterns(&["05.03.2026".to_string(), "15.12.2025".to_string()]);
        assert_eq!(patterns[0].0, "5 марта");
        assert_eq!(patterns[1].0, "15 декабря");
    }

    #[test]
    fn unparseable_target_dates_are_ignored() {
        assert!(date_patterns(&["not-a-date".to_string()]).is_empty());
    }

    #[test]
    fn separator_matching_is_substring_based() {
        let patterns = date_patterns(&["15.12.2025".to_string()]);
        assert_eq!(
            match_separator("15 декабря, понедельник", &patterns),
            Some("15.12.2025".to_string())
        );
        assert_eq!(match_separator("14 декабря", &patterns), None);
    }
}
