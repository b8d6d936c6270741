use std::time::Duration;

use crate::browser::dom::Element;

/// Errors surfaced by the page capability.
///
/// IMPORTANT:
/// - The pipeline treats every variant the same way: the current
///   adapter's pagination loop terminates and partial results are
///   kept. The split exists only for log readability.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The page did not load within budget (network failure, bad
    /// status, timeout — not distinguished further).
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// A required element never appeared on the current page.
    #[error("selector `{selector}` did not appear within {timeout_ms}ms")]
    SelectorTimeout { selector: String, timeout_ms: u64 },
}

/// Page is the abstraction layer between:
/// - The generic collection pipeline
/// - The engine that actually fetches and renders listings
///
/// Each implementation must:
/// - Load a URL and hold its rendered content
/// - Answer whether a selector is present
/// - Return matched elements as owned handles
///
/// DESIGN GOALS:
/// - Zero transport-specific logic outside implementations
/// - Adapters stay testable against fixture pages
///
/// CONTRACT:
/// - `query` reflects the most recently navigated page
/// - `query` on an unloaded page returns no elements
///
#[async_trait::async_trait]
pub trait Page: Send {
    /// Loads `url`, replacing the current page content.
    ///
    /// Any failure (connect, status, body read, timeout) maps to
    /// `PageError::Navigation`.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), PageError>;

    /// Waits until `selector` matches at least one element on the
    /// current page, up to `timeout`.
    async fn wait_for_selector(&mut self, selector: &str, timeout: Duration)
        -> Result<(), PageError>;

    /// Returns all elements matching `selector` on the current
    /// page, in document order.
    fn query(&self, selector: &str) -> Vec<Element>;
}
