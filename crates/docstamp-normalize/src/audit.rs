//! Read-only audit of header blocks.

use std::path::PathBuf;

use docstamp_frontmatter::extract_frontmatter;

use crate::document::Document;
use crate::normalizer::{FileFailure, NormalizeError, Normalizer};

/// A document whose header block could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedHeader {
    pub path: PathBuf,
    pub message: String,
}

/// Findings of an audit pass.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Documents with a well-formed header
    pub valid: usize,

    /// Documents that would receive a generated header
    pub missing: Vec<PathBuf>,

    /// Documents that start with a delimiter but do not parse
    pub malformed: Vec<MalformedHeader>,

    /// Documents that could not be read
    pub failures: Vec<FileFailure>,
}

impl AuditReport {
    /// True when every document has a well-formed header.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty() && self.failures.is_empty()
    }
}

impl Normalizer {
    /// Inspect every matching document without modifying anything.
    pub fn audit(&self) -> Result<AuditReport, NormalizeError> {
        let mut report = AuditReport::default();

        for path in self.discover()? {
            let doc = match Document::read(&path) {
                Ok(doc) => doc,
                Err(error) => {
                    tracing::warn!("{}", error);
                    report.failures.push(FileFailure { path, error });
                    continue;
                }
            };

            if !doc.has_header {
                tracing::debug!("Missing frontmatter: {}", path.display());
                report.missing.push(path);
                continue;
            }

            match extract_frontmatter(&doc.raw_content) {
                Ok(_) => report.valid += 1,
                Err(e) => {
                    tracing::debug!("Malformed frontmatter in {}: {}", path.display(), e);
                    report.malformed.push(MalformedHeader {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
