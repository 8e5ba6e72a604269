//! Frontmatter detection and parsing.

use serde::Deserialize;

/// The line that opens and closes a header block.
pub const DELIMITER: &str = "---";

/// Parsed frontmatter from an existing header block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title (required)
    pub title: String,

    /// Page description for SEO
    #[serde(default)]
    pub description: Option<String>,
}

/// Check whether a document already begins with a header block.
///
/// Only an exact `---` first line counts. A trailing `\r` is accepted so CRLF
/// documents are recognized, but leading blank lines, indentation, a byte order
/// mark or a longer run of hyphens are not.
pub fn has_header(source: &str) -> bool {
    let first = source.split('\n').next().unwrap_or("");
    strip_line_ending(first) == DELIMITER
}

/// Extract frontmatter from document content.
///
/// Returns the parsed frontmatter and the remaining content after the closing
/// delimiter. Documents without a header yield `None` and the untouched source.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    if !has_header(source) {
        return Ok((None, source));
    }

    let mut lines = source.split_inclusive('\n');
    let open_len = lines.next().map_or(0, str::len);
    let mut offset = open_len;

    for line in lines {
        let end = offset + line.len();

        if strip_line_ending(line) == DELIMITER {
            let yaml_content = &source[open_len..offset];
            let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
                .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

            return Ok((Some(frontmatter), &source[end..]));
        }

        offset = end;
    }

    Err(FrontmatterError::Unclosed)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_leading_delimiter() {
        assert!(has_header("---\ntitle: X\n---\nbody"));
        assert!(has_header("---\r\ntitle: X\r\n---\r\n"));
        assert!(has_header("---"));
    }

    #[test]
    fn rejects_inexact_delimiters() {
        assert!(!has_header(""));
        assert!(!has_header("hello"));
        assert!(!has_header("\n---\ntitle: X\n---\n"));
        assert!(!has_header(" ---\ntitle: X\n---\n"));
        assert!(!has_header("----\ntitle: X\n----\n"));
        assert!(!has_header("--- \ntitle: X\n---\n"));
        assert!(!has_header("\u{feff}---\ntitle: X\n---\n"));
        assert!(!has_header("# Heading\n---\n"));
    }

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: Button
description: A clickable button component
---

# Button Component
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "Button");
        assert_eq!(
            fm.description,
            Some("A clickable button component".to_string())
        );
        assert_eq!(content, "\n# Button Component\n");
    }

    #[test]
    fn extracts_crlf_frontmatter() {
        let source = "---\r\ntitle: Intro\r\n---\r\nbody";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().title, "Intro");
        assert_eq!(content, "body");
    }

    #[test]
    fn ignores_unknown_fields() {
        let source = "---\ntitle: Guide\nsidebar:\n  order: 2\n---\n";

        let (fm, _) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().title, "Guide");
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }

    #[test]
    fn errors_on_missing_title() {
        let source = "---\ndescription: No title\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
