//! Per-format text extraction.
//!
//! [`extract`] is the entry point of the pipeline: it takes a
//! [`SourceDocument`] and dispatches on its declared format, producing the
//! raw (pre-normalization) text. Uploaded bytes are handled in-process;
//! [`DeclaredFormat::HtmlFetch`] documents go through [`fetch_article`].

use crate::fetch::{FetchConfig, FetchedContent, fetch_article};
use crate::source::{DeclaredFormat, ExtractionResult, SourceDocument};
use crate::{RestyleError, Result};

/// Extracts plain text from a source document.
///
/// Dispatches exhaustively on the declared format. Each arm either produces
/// an [`ExtractionResult`] or fails with the matching taxonomy variant;
/// nothing is retried and no partial text is returned on failure.
pub async fn extract(doc: &SourceDocument, fetch_config: &FetchConfig) -> Result<ExtractionResult> {
    match doc.format {
        DeclaredFormat::PlainText | DeclaredFormat::Markdown => {
            extract_utf8(&doc.data).map(ExtractionResult::new)
        }
        DeclaredFormat::WordDocument => extract_docx(&doc.data).map(ExtractionResult::new),
        DeclaredFormat::Pdf => extract_pdf(&doc.data).map(ExtractionResult::new),
        DeclaredFormat::HtmlFetch => match fetch_article(&doc.origin, fetch_config).await? {
            FetchedContent::Parsed(text) => Ok(ExtractionResult::new(text)),
            FetchedContent::RawFallback(text) => Ok(ExtractionResult::new(text).with_warning(
                "no HTML parser available; returning raw response body truncated to 5000 characters",
            )),
        },
    }
}

/// Decodes uploaded bytes as UTF-8, verbatim.
fn extract_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| RestyleError::Decode(e.to_string()))
}

/// Concatenates DOCX paragraph texts in document order, one per line.
#[cfg(feature = "docx")]
fn extract_docx(bytes: &[u8]) -> Result<String> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

    let docx = read_docx(bytes).map_err(|e| RestyleError::MalformedDocument(format!("DOCX: {:?}", e)))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(not(feature = "docx"))]
fn extract_docx(_bytes: &[u8]) -> Result<String> {
    Err(RestyleError::UnsupportedFormat(
        "DOCX support is not compiled in (enable the `docx` feature)".to_string(),
    ))
}

/// Extracts PDF text page by page in page order, pages separated by newlines.
#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String> {
    use lopdf::Document;

    let document =
        Document::load_mem(bytes).map_err(|e| RestyleError::MalformedDocument(format!("PDF: {}", e)))?;

    let mut pages: Vec<String> = Vec::new();
    for (page_number, _) in document.get_pages() {
        let text = document
            .extract_text(&[page_number])
            .map_err(|e| RestyleError::MalformedDocument(format!("PDF page {}: {}", page_number, e)))?;
        pages.push(text);
    }

    Ok(pages.join("\n"))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String> {
    Err(RestyleError::UnsupportedFormat(
        "PDF support is not compiled in (enable the `pdf` feature)".to_string(),
    ))
}
