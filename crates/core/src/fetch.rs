//! Article fetching from URLs.
//!
//! This module performs the HTTP GET for [`DeclaredFormat::HtmlFetch`]
//! documents and turns the response into text. With the `html` feature the
//! page is parsed and `<script>`/`<style>` subtrees are dropped before
//! collecting visible text; without it the raw body is truncated and flagged
//! so callers can warn the user.
//!
//! [`DeclaredFormat::HtmlFetch`]: crate::DeclaredFormat::HtmlFetch

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{RestyleError, Result};

/// Number of characters of raw body kept when no HTML parser is available.
#[cfg(not(feature = "html"))]
const RAW_FALLBACK_LIMIT: usize = 5000;

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// The text recovered from a fetched page.
///
/// `RawFallback` is the degraded path taken when no HTML-parsing capability
/// is compiled in: the body is returned as-is, truncated, and the extractor
/// attaches a warning instead of silently passing markup downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    /// Visible text extracted from the parsed page.
    Parsed(String),
    /// Raw response body truncated to 5000 characters.
    RawFallback(String),
}

/// Fetches an article page and recovers its text content.
///
/// Performs an HTTP GET with the configured timeout and a browser-like
/// User-Agent. Non-2xx responses, timeouts, and transport failures all
/// surface as [`RestyleError::Fetch`].
pub async fn fetch_article(url: &str, config: &FetchConfig) -> Result<FetchedContent> {
    let parsed_url = Url::parse(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(|e| RestyleError::Fetch(e.to_string()))?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                RestyleError::Fetch(format!("request timed out after {} seconds", config.timeout))
            } else {
                RestyleError::Fetch(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RestyleError::Fetch(format!("server returned HTTP {}", status.as_u16())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| RestyleError::Fetch(e.to_string()))?;

    Ok(page_text(&body))
}

/// Recovers text from a fetched HTML body.
#[cfg(feature = "html")]
fn page_text(body: &str) -> FetchedContent {
    FetchedContent::Parsed(visible_text(body))
}

/// Degraded path: no HTML parser compiled in, keep a truncated raw body.
#[cfg(not(feature = "html"))]
fn page_text(body: &str) -> FetchedContent {
    FetchedContent::RawFallback(body.chars().take(RAW_FALLBACK_LIMIT).collect())
}

/// Collects the visible text of an HTML document.
///
/// Walks the parsed tree in document order, skipping `<script>` and
/// `<style>` subtrees. Whitespace is kept verbatim; the normalizer cleans
/// it up afterwards.
#[cfg(feature = "html")]
pub fn visible_text(html: &str) -> String {
    use scraper::Html;

    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(&document.root_element(), &mut text);
    text
}

#[cfg(feature = "html")]
fn collect_text(element: &scraper::ElementRef, out: &mut String) {
    const SKIP_TAGS: [&str; 2] = ["script", "style"];

    for child in element.children() {
        if let Some(child_element) = child.value().as_element() {
            if SKIP_TAGS.contains(&child_element.name()) {
                continue;
            }
            if let Some(element_ref) = scraper::ElementRef::wrap(child) {
                collect_text(&element_ref, out);
            }
        } else if let Some(text_node) = child.value().as_text() {
            out.push_str(text_node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_fetch_invalid_url() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_article("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(RestyleError::Fetch(_))));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_visible_text_strips_script_and_style() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><p>Kept text</p><script>alert("dropped")</script></body></html>"#;

        let text = visible_text(html);
        assert!(text.contains("Kept text"));
        assert!(!text.contains("alert"));
        assert!(!text.contains("color: red"));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_visible_text_keeps_nested_content() {
        let html = "<div><p>One <em>two</em> three</p><p>four</p></div>";
        let text = visible_text(html);
        for word in ["One", "two", "three", "four"] {
            assert!(text.contains(word));
        }
    }

    #[cfg(not(feature = "html"))]
    #[test]
    fn test_raw_fallback_truncates() {
        let body = "x".repeat(RAW_FALLBACK_LIMIT + 100);
        match page_text(&body) {
            FetchedContent::RawFallback(text) => assert_eq!(text.chars().count(), RAW_FALLBACK_LIMIT),
            FetchedContent::Parsed(_) => unreachable!(),
        }
    }
}
