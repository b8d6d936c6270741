use crate::browser::{Element, Page};
use crate::schema::TradeLeadRecord;

/// SourceAdapter is the core abstraction layer between:
/// - The generic collection pipeline
/// - Site-specific listing layouts
///
/// Each site implementation must:
/// - Drive its own pagination over the shared page
/// - Extract candidate rows / items
/// - Filter by the resolved target dates
/// - Normalize everything into TradeLeadRecord
///
/// DESIGN GOALS:
/// - Zero site-specific logic outside adapters
/// - One adapter per site
/// - Uniform output format across all sites
///
/// FAILURE SEMANTICS:
/// - `scrape` never fails. Any page error terminates this
///   adapter's own loop; records gathered so far are returned.
///   One broken site must never cost the other site's results.
///
#[async_trait::async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Canonical source name, used for logging only.
    fn name(&self) -> &'static str;

    /// Base listing URL. Stamped into every record's `source`
    /// field for downstream routing.
    fn base_url(&self) -> &'static str;

    /// Scrapes the listing for records whose date falls inside
    /// `target_dates` (each "DD.MM.YYYY").
    ///
    /// CONTRACT:
    /// - Emitted records carry `id = 0`; ids are assigned after
    ///   global deduplication, never here
    /// - Every record's `event_date` date part is a member of
    ///   `target_dates`
    /// - Must NOT panic on malformed markup; missing optional
    ///   fields resolve to the schema sentinels
    async fn scrape(
        &self,
        page: &mut dyn Page,
        target_dates: &[String],
    ) -> Vec<TradeLeadRecord>;
}

/// Ordered selector fallback chain for one field.
///
/// Site markup drifts; a field that lives in `div.h3size a` today
/// may only be reachable through `b a` tomorrow. Each field is
/// therefore extracted by trying selectors in priority order and
/// taking the first hit, with any raw-text heuristic handled by the
/// caller as the final fallback.
pub struct SelectorChain(&'static [&'static str]);

impl SelectorChain {
    pub const fn new(selectors: &'static [&'static str]) -> Self {
        SelectorChain(selectors)
    }

    /// First element matched by any selector in chain order.
    pub fn select_first(&self, scope: &Element) -> Option<Element> {
        self.0.iter().find_map(|s| scope.select_first(s))
    }

    /// Trimmed text of the first match, skipping empty results.
    pub fn text(&self, scope: &Element) -> Option<String> {
        let text = self.select_first(scope)?.text().trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
