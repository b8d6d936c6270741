use std::sync::atomic::Ordering;

use chrono::Local;

use crate::{
    browser::BrowserSession,
    collector::dedup::dedup_and_assign_ids,
    dates::resolve_target_dates,
    metrics::METRICS,
    schema::TradeLeadRecord,
    sources,
};

/// Runs one full collection pass.
///
/// This function is responsible for:
/// - Resolving the target date window
/// - Launching the session and opening one page
/// - Running each registered adapter sequentially on that page
/// - Releasing the session whether or not an adapter failed
/// - Deduplicating the concatenated output and assigning ids
///
/// GUARANTEES:
/// - Never fails: a session launch error is logged and yields an
///   empty collection; adapter errors are already absorbed inside
///   each adapter
/// - Output order is first-seen order: metal-trade records first,
///   then metalinfo, minus duplicates
///
/// This function does NOT:
/// - Parse listings (adapter responsibility)
/// - Write the cache or stdout (entrypoint responsibility)
///
pub async fn collect_all() -> Vec<TradeLeadRecord> {
    log::info!("--- НАЧАЛО СБОРА ---");

    let target_dates = resolve_target_dates(Local::now().date_naive());
    let mut all_events: Vec<TradeLeadRecord> = Vec::new();

    match BrowserSession::launch() {
        Ok(session) => {
            let mut page = session.new_page();

            for adapter in sources::adapters() {
                let events = adapter.scrape(&mut page, &target_dates).await;
                log::info!("{}: собрано {} заявок", adapter.name(), events.len());
                all_events.extend(events);
            }

            // Session (and its page) released here, adapter
            // failures included.
        }
        Err(e) => {
            log::error!("Критическая ошибка сессии: {e}");
        }
    }

    log::info!("Всего до дедупликации: {}", all_events.len());

    let final_events = dedup_and_assign_ids(all_events);

    METRICS
        .leads_collected
        .fetch_add(final_events.len() as u64, Ordering::Relaxed);
    log::info!("Всего после дедупликации: {}", final_events.len());
    log::info!("{}", METRICS.summary());

    final_events
}
