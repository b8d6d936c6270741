use std::collections::HashMap;
use std::time::Duration;

use metal_lead_collector::browser::{dom, Element, Page, PageError};

/// Fixture-backed `Page` for driving adapters without a network.
///
/// Maps exact URLs to canned HTML documents. Navigating to an
/// unmapped URL fails like a dead site would, which is also how
/// tests bound pagination: only provide the pages the scenario
/// needs.
pub struct FixturePage {
    pages: HashMap<String, String>,
    body: String,
    pub visited: Vec<String>,
}

impl FixturePage {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        FixturePage {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
            body: String::new(),
            visited: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl Page for FixturePage {
    async fn navigate(&mut self, url: &str, _timeout: Duration) -> Result<(), PageError> {
        self.visited.push(url.to_string());
        match self.pages.get(url) {
            Some(body) => {
                self.body = body.clone();
                Ok(())
            }
            None => Err(PageError::Navigation {
                url: url.to_string(),
                reason: "no fixture for url".to_string(),
            }),
        }
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), PageError> {
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
