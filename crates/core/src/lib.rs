pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod generate;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod source;

pub use error::{RestyleError, Result};
pub use export::{export_filename, word_count};
pub use extract::extract;
pub use fetch::FetchConfig;
pub use fetch::{FetchedContent, fetch_article};
#[cfg(feature = "html")]
pub use fetch::visible_text;
pub use generate::{GenerationClient, GenerationResult};
pub use normalize::normalize;
pub use pipeline::{RewriteOutcome, rewrite_document};
pub use prompt::{
    GenerationConfig, GenerationRequest, Model, SYSTEM_INSTRUCTION, StyleRequest, build_request,
};
pub use source::{DeclaredFormat, ExtractionResult, SourceDocument};
