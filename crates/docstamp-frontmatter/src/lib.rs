//! Frontmatter handling for Markdown and MDX documents.
//!
//! This crate holds the pure text side of docstamp: deciding whether a document
//! already starts with a header block, deriving a human readable title from a
//! file name, and rendering the header block that gets prepended to documents
//! missing one. Nothing in here touches the filesystem.

pub mod frontmatter;
pub mod header;
pub mod title;

pub use frontmatter::{extract_frontmatter, has_header, Frontmatter, FrontmatterError, DELIMITER};
pub use header::{stamp, HeaderBlock, LineEnding};
pub use title::{derive_title, title_from_path, UNTITLED};
