use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio::time::sleep;

use crate::{
    browser::{Element, Page, PageError},
    metrics::METRICS,
    schema::{LeadStatus, TradeLeadRecord, COMPANY_UNSPECIFIED, REGION_UNSPECIFIED},
    util,
};

use super::adapter::{SelectorChain, SourceAdapter};

/// metal-trade.ru adapter
///
/// Tabular listing with offset-based pagination:
/// https://www.metal-trade.ru/buy/?curPos=30
///
/// DESIGN:
/// - Pure listing extraction, no session logic
/// - At most 6 page fetches per run (crawl-budget cap)
/// - Rows without a timestamp are non-data rows and are skipped
pub struct MetalTradeAdapter;

const BASE_URL: &str = "https://www.metal-trade.ru/buy/";

/// Listing rows per page; the `curPos` offset steps by this much.
const PAGE_SIZE: usize = 30;

/// Highest offset worth fetching. Anything past this is days old
/// and can never fall inside a two/three-day target window.
const MAX_OFFSET: usize = 150;

const NAV_TIMEOUT: Duration = Duration::from_secs(30);
const TABLE_TIMEOUT: Duration = Duration::from_secs(15);

/// Politeness delay between page fetches.
const PAGE_DELAY: Duration = Duration::from_millis(1500);

/// Trust score for this source. The table layout is rigid, so
/// extraction is comparatively reliable.
const CONFIDENCE: u8 = 70;

/// Product title lives in a styled link, a plain bold link, or
/// bold text in the first cell, depending on listing age.
static PRODUCT: SelectorChain =
    SelectorChain::new(&["div.h3size a", "b a", "td:first-child b"]);

/// Posting company is the only `a.link` in the row.
static COMPANY: SelectorChain = SelectorChain::new(&["a.link"]);

#[async_trait::async_trait]
impl SourceAdapter for MetalTradeAdapter {
    fn name(&self) -> &'static str {
        "metal-trade"
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    async fn scrape(
        &self,
        page: &mut dyn Page,
        target_dates: &[String],
    ) -> Vec<TradeLeadRecord> {
        let targets: HashSet<&str> = target_dates.iter().map(String::as_str).collect();
        let mut events = Vec::new();
        let mut offset = 0;

        log::info!("--- MetalTrade: Начало парсинга ---");

        while offset <= MAX_OFFSET {
            let url = if offset == 0 {
                BASE_URL.to_string()
            } else {
                format!("{BASE_URL}?curPos={offset}")
            };
            log::info!("MetalTrade: Переход на {url}");

            if let Err(e) = fetch_listing(page, &url).await {
                METRICS.page_errors.fetch_add(1, Ordering::Relaxed);
                log::error!("MetalTrade ошибка: {e}");
                break;
            }
            METRICS.pages_fetched.fetch_add(1, Ordering::Relaxed);

            let rows = page.query("table.tradetable tr");
            if rows.is_empty() {
                log::info!("MetalTrade: Строки в таблице не найдены.");
                break;
            }
            METRICS
                .rows_scanned
                .fetch_add(rows.len() as u64, Ordering::Relaxed);

            let mut found_on_page = 0;
            for row in &rows {
                if let Some(event) = extract_row(row, &targets) {
                    events.push(event);
                    found_on_page += 1;
                }
            }

            log::info!("MetalTrade: Добавлено {found_on_page} заявок.");

            // A later page with zero in-range rows means the rest of
            // the listing is past the target window.
            if found_on_page == 0 && offset > 0 {
                log::info!("MetalTrade: Заявки за выбранные даты закончились.");
                break;
            }

            offset += PAGE_SIZE;
            sleep(PAGE_DELAY).await;
        }

        events
    }
}

async fn fetch_listing(page: &mut dyn Page, url: &str) -> Result<(), PageError> {
    page.navigate(url, NAV_TIMEOUT).await?;
    page.wait_for_selector("table.tradetable", TABLE_TIMEOUT).await?;
    Ok(())
}

/// Extracts one record from a listing row.
///
/// Returns `None` for:
/// - rows without a "DD.MM.YYYY HH:MM" timestamp (headers, ads)
/// - rows whose date is outside the target window
/// - rows where even the fallback product heuristic comes up empty
fn extract_row(row: &Element, targets: &HashSet<&str>) -> Option<TradeLeadRecord> {
    let content = row.text();

    let caps = util::DATE_TIME_RE.captures(content)?;
    let event_date = caps.get(1)?.as_str();
    let event_time = caps.get(2)?.as_str();

    if !targets.contains(event_date) {
        return None;
    }

    // Title link first; failing that, the first line of the first
    // cell's text.
    let product = PRODUCT.text(row).or_else(|| {
        let cell = row.select_first("td")?;
        util::first_line(cell.text())
    })?;

    let company = COMPANY
        .text(row)
        .unwrap_or_else(|| COMPANY_UNSPECIFIED.to_string());

    // Region is conventionally the trailing line of the row text.
    let region = util::last_nonempty_line(content)
        .unwrap_or_else(|| REGION_UNSPECIFIED.to_string());

    Some(TradeLeadRecord {
        id: 0,
        product: product.clone(),
        company,
        region,
        // No separate quantity field on this site.
        volume: product,
        event_date: format!("{event_date} {event_time}"),
        status: LeadStatus::Potential,
        confidence: CONFIDENCE,
        source: BASE_URL.to_string(),
    })
}
