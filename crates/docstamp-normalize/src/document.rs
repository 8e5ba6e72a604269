//! A single content document and its in-place rewrite.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use docstamp_frontmatter::{has_header, stamp, title_from_path, HeaderBlock, LineEnding};
use tempfile::NamedTempFile;

use crate::normalizer::NormalizeError;

/// A document read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file path
    pub path: PathBuf,

    /// Full file content as read
    pub raw_content: String,

    /// Whether the content already starts with a header block
    pub has_header: bool,
}

impl Document {
    /// Read a document fully into memory.
    pub fn read(path: &Path) -> Result<Self, NormalizeError> {
        let bytes = fs::read(path).map_err(|e| NormalizeError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let raw_content = String::from_utf8(bytes).map_err(|_| NormalizeError::Decode {
            path: path.display().to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            has_header: has_header(&raw_content),
            raw_content,
        })
    }

    /// Title derived from the document's file name.
    pub fn title(&self) -> String {
        title_from_path(&self.path)
    }

    /// The header block this document would receive.
    pub fn header(&self, framework: &str) -> HeaderBlock {
        HeaderBlock::for_title(self.title(), framework)
    }

    /// Content with a generated header prepended.
    ///
    /// Returns `None` when the document already has a header.
    pub fn stamped(&self, framework: &str) -> Option<String> {
        if self.has_header {
            return None;
        }

        let line_ending = LineEnding::detect(&self.raw_content);
        Some(stamp(
            &self.raw_content,
            &self.header(framework),
            line_ending,
        ))
    }
}

/// Replace a file's content atomically.
///
/// The new content goes to a temporary file next to the original, which is
/// renamed over it once fully written. The original permissions are carried
/// over. On any error the temporary file is removed and the original is left
/// as it was.
pub(crate) fn write_in_place(path: &Path, content: &str) -> Result<(), NormalizeError> {
    let write_err = |e: std::io::Error| NormalizeError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let permissions = fs::metadata(path).map_err(write_err)?.permissions();
    if permissions.readonly() {
        return Err(NormalizeError::ReadOnly {
            path: path.display().to_string(),
        });
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    fs::set_permissions(temp.path(), permissions).map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
