//! Random-article corpus acquisition from Wikipedia.
//!
//! Each document is the plaintext of one random main-namespace article in
//! the requested language edition. Requests are blocking and sequential;
//! any failure just drops that document.

use crate::core::types::Document;
use crate::corpus::CorpusProvider;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("langfreq/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
}

pub struct WikipediaCorpus {
    agent: ureq::Agent,
}

impl WikipediaCorpus {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }

    fn endpoint(lang: &str) -> String {
        format!("https://{lang}.wikipedia.org/w/api.php")
    }

    /// Plaintext of one random article, or None if anything went wrong.
    pub fn fetch_one(&self, lang: &str) -> Option<Document> {
        let result = self
            .agent
            .get(&Self::endpoint(lang))
            .header("User-Agent", USER_AGENT)
            .query("action", "query")
            .query("format", "json")
            .query("generator", "random")
            .query("grnnamespace", "0")
            .query("grnlimit", "1")
            .query("prop", "extracts")
            .query("explaintext", "1")
            .call();

        let mut response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(lang = %lang, error = %e, "wikipedia request failed");
                return None;
            }
        };

        match response.body_mut().read_json::<QueryResponse>() {
            Ok(body) => extract_document(body),
            Err(e) => {
                warn!(lang = %lang, error = %e, "unreadable wikipedia response");
                None
            }
        }
    }
}

impl CorpusProvider for WikipediaCorpus {
    fn fetch(&self, lang: &str, count: usize) -> Vec<Document> {
        (0..count).filter_map(|_| self.fetch_one(lang)).collect()
    }
}

// Section headings come through as "== Title ==" in plaintext extracts.
fn extract_document(body: QueryResponse) -> Option<Document> {
    let page = body.query?.pages.into_values().next()?;
    let text = page.extract.replace("==", "");
    if text.trim().is_empty() {
        debug!(title = %page.title, "random page has no text");
        return None;
    }
    debug!(title = %page.title, chars = text.chars().count(), "fetched page");
    Some(text)
}
