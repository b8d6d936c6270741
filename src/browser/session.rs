use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::browser::dom::{self, Element};
use crate::browser::page::{Page, PageError};

/// Browser-like session over plain HTTP.
///
/// Both listing sites are server-rendered, so a headless engine is
/// not required: fetching the document and running selectors over
/// it observes the same markup a browser would.
///
/// Responsibilities:
/// - Own the HTTP client (headers, redirects, connection pool)
/// - Hand out pages bound to that client
///
/// The session is the only shared resource of a run. It is owned by
/// the orchestrator and released when the value is dropped, whether
/// or not an adapter failed.
pub struct BrowserSession {
    client: reqwest::Client,
}

/// Desktop UA; both sites serve a degraded mobile layout otherwise.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

impl BrowserSession {
    /// Builds the session.
    ///
    /// The `Accept-Language` header is part of the contract: both
    /// sources localize date separators and field labels, and the
    /// adapters' patterns assume the Russian rendering.
    pub fn launch() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ru-RU,ru;q=0.9"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(BrowserSession { client })
    }

    /// Opens a fresh page on this session.
    pub fn new_page(&self) -> HttpPage {
        HttpPage {
            client: self.client.clone(),
            url: String::new(),
            body: String::new(),
        }
    }
}

/// Live `Page` implementation backed by the session's HTTP client.
///
/// Holds the most recently fetched document as text; queries parse
/// it on demand and return owned snapshots (see `dom::Element`).
pub struct HttpPage {
    client: reqwest::Client,
    url: String,
    body: String,
}

#[async_trait::async_trait]
impl Page for HttpPage {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), PageError> {
        let nav = |reason: String| PageError::Navigation {
            url: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| nav(e.to_string()))?
            .error_for_status()
            .map_err(|e| nav(e.to_string()))?;

        self.body = resp.text().await.map_err(|e| nav(e.to_string()))?;
        self.url = url.to_string();
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), PageError> {
        // The document is static once fetched; either the selector
        // matches now or it never will.
        if dom::document_has(&self.body, selector) {
            Ok(())
        } else {
            Err(PageError::SelectorTimeout {
                selector: selector.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            })
        }
    }

    fn query(&self, selector: &str) -> Vec<Element> {
        dom::select_in_document(&self.body, selector)
    }
}
