use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

/// Global runtime metrics for one collection pass.
///
/// Purpose:
/// - Track fetch volume (pages, rows)
/// - Track yield (kept leads, dropped duplicates)
/// - Track failures (terminated adapter loops)
///
/// Design:
/// - Lock-free (Atomics)
/// - Cheap to update
/// - Safe in async contexts
///
/// The counters exist to diagnose site-markup drift, which is the
/// expected long-term failure mode: a run that fetches pages but
/// scans zero rows means a selector went stale.
#[derive(Default)]
pub struct RuntimeMetrics {
    /// Listing pages fetched successfully, both sources
    pub pages_fetched: AtomicU64,

    /// Rows / list items walked, matched or not
    pub rows_scanned: AtomicU64,

    /// Records in the final, deduplicated collection
    pub leads_collected: AtomicU64,

    /// Records discarded as cross-source duplicates
    pub duplicates_dropped: AtomicU64,

    /// Page fetches that terminated an adapter's loop
    pub page_errors: AtomicU64,
}

impl RuntimeMetrics {
    /// One-line run summary for the operator log.
    pub fn summary(&self) -> String {
        format!(
            "[METRICS] pages={} rows={} leads={} dupes={} page_errors={}",
            self.pages_fetched.load(Ordering::Relaxed),
            self.rows_scanned.load(Ordering::Relaxed),
            self.leads_collected.load(Ordering::Relaxed),
            self.duplicates_dropped.load(Ordering::Relaxed),
            self.page_errors.load(Ordering::Relaxed),
        )
    }
}

/// Global metrics registry (singleton)
pub static METRICS: Lazy<Arc<RuntimeMetrics>> =
    Lazy::new(|| Arc::new(RuntimeMetrics::default()));
