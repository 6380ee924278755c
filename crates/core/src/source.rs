//! Input document types.
//!
//! This module defines [`SourceDocument`], the immutable description of one
//! piece of article content handed to the pipeline, together with the closed
//! set of declared input formats and the extraction output type.

use url::Url;

use crate::{RestyleError, Result};

/// The closed set of input formats the extractor can dispatch on.
///
/// Adding a format means adding a variant here and a matching arm in the
/// extractor; the compiler checks exhaustiveness.
///
/// # Example
///
/// ```rust
/// use restyle_core::DeclaredFormat;
///
/// assert_eq!(DeclaredFormat::from_extension("md").unwrap(), DeclaredFormat::Markdown);
/// assert!(DeclaredFormat::from_extension("exe").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredFormat {
    /// Plain UTF-8 text (`.txt`).
    PlainText,
    /// Markdown source, decoded verbatim like plain text (`.md`).
    Markdown,
    /// A DOCX container (`.docx`).
    WordDocument,
    /// A PDF document (`.pdf`).
    Pdf,
    /// An HTML page fetched from a URL.
    HtmlFetch,
}

impl DeclaredFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Ok(Self::PlainText),
            "md" => Ok(Self::Markdown),
            "docx" => Ok(Self::WordDocument),
            "pdf" => Ok(Self::Pdf),
            other => Err(RestyleError::UnsupportedFormat(format!(
                "unrecognized file extension .{} (supported: .txt, .md, .docx, .pdf)",
                other
            ))),
        }
    }
}

/// One piece of article content handed to the pipeline.
///
/// A document is either uploaded bytes with a format declared by the file
/// extension, or a URL to fetch. It is immutable once created; each rewrite
/// invocation owns its document end-to-end.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Raw input bytes. Empty for [`DeclaredFormat::HtmlFetch`] documents,
    /// where the content is fetched from `origin` instead.
    pub data: Vec<u8>,
    /// Declared input format.
    pub format: DeclaredFormat,
    /// The filename or URL this document came from. Used for export naming.
    pub origin: String,
}

impl SourceDocument {
    /// Creates a document from an uploaded file's name and bytes.
    ///
    /// The format is sniffed from the filename extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restyle_core::{DeclaredFormat, SourceDocument};
    ///
    /// let doc = SourceDocument::from_file("article.txt", b"Hello".to_vec()).unwrap();
    /// assert_eq!(doc.format, DeclaredFormat::PlainText);
    /// ```
    pub fn from_file(name: &str, bytes: Vec<u8>) -> Result<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext).ok_or_else(|| {
            RestyleError::UnsupportedFormat(format!("filename {} has no extension", name))
        })?;

        Ok(Self {
            data: bytes,
            format: DeclaredFormat::from_extension(ext)?,
            origin: name.to_string(),
        })
    }

    /// Creates a document that will be fetched from a URL.
    ///
    /// The URL must parse and use an http or https scheme.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RestyleError::Fetch(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            data: Vec::new(),
            format: DeclaredFormat::HtmlFetch,
            origin: url.to_string(),
        })
    }
}

/// The output of the extraction step.
///
/// Owned solely by the caller; discarded after normalization. When
/// extraction produces no text, `warnings` records why instead of returning
/// a silent empty success.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted plain text, raw (pre-normalization).
    pub text: String,
    /// Ordered, human-readable notes about degraded extraction.
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// Wraps extracted text, recording a warning if it is empty.
    pub fn new(text: String) -> Self {
        let mut result = Self { text, warnings: Vec::new() };
        if result.text.trim().is_empty() {
            result.warnings.push("document contained no extractable text".to_string());
        }
        result
    }

    /// Appends a warning, preserving insertion order.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}
