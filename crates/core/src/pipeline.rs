//! End-to-end rewrite pipeline.
//!
//! One call runs the full cycle: extract, normalize, build the prompt, call
//! the backend. Each step completes or fails atomically; a failing step
//! yields nothing usable downstream.

use crate::extract::extract;
use crate::fetch::FetchConfig;
use crate::generate::{GenerationClient, GenerationResult};
use crate::normalize::normalize;
use crate::prompt::{StyleRequest, build_request};
use crate::source::SourceDocument;
use crate::Result;

/// Everything the front end needs to report one finished rewrite.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// The backend's rewritten text and token usage.
    pub result: GenerationResult,
    /// The normalized source text, kept so callers can compute word-count
    /// deltas against the rewrite.
    pub source_text: String,
    /// Warnings accumulated during extraction.
    pub warnings: Vec<String>,
}

/// Runs one complete rewrite cycle for a document.
///
/// Sequential and stateless: each invocation owns its data end-to-end, and
/// the generation call blocks until the backend responds.
pub async fn rewrite_document(
    doc: &SourceDocument,
    style: &StyleRequest,
    client: &GenerationClient,
    fetch_config: &FetchConfig,
) -> Result<RewriteOutcome> {
    let extraction = extract(doc, fetch_config).await?;
    let source_text = normalize(&extraction.text);
    let request = build_request(&source_text, style)?;
    let result = client.generate(&request, &style.config).await?;

    Ok(RewriteOutcome { result, source_text, warnings: extraction.warnings })
}
