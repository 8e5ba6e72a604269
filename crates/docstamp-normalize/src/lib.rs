//! Frontmatter normalizer for docstamp.
//!
//! Walks a content tree, finds Markdown and MDX documents that do not start
//! with a header block, and prepends one generated from the file name.

pub mod audit;
pub mod document;
pub mod normalizer;

pub use audit::{AuditReport, MalformedHeader};
pub use document::Document;
pub use normalizer::{
    FileFailure, FileOutcome, NormalizeConfig, NormalizeError, NormalizeReport, Normalizer,
    DEFAULT_CONTENT_DIR, DEFAULT_EXTENSIONS, DEFAULT_FRAMEWORK,
};
