//! Header block synthesis.

use std::borrow::Cow;

use crate::frontmatter::DELIMITER;

/// Line terminator used when rendering a header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the line ending of a document from its first line break.
    ///
    /// Documents without any line break are treated as LF.
    pub fn detect(source: &str) -> Self {
        match source.find('\n') {
            Some(pos) if source[..pos].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A generated header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Title derived from the file name
    pub title: String,

    /// Fixed-format description referencing the title
    pub description: String,
}

impl HeaderBlock {
    /// Build the header block for a title.
    pub fn for_title(title: impl Into<String>, framework: &str) -> Self {
        let title = title.into();
        let description = format!("Learn about {} in {}", title, framework);
        Self { title, description }
    }

    /// Render the header block followed by the placeholder body section.
    pub fn render(&self, line_ending: LineEnding) -> String {
        let lines = [
            DELIMITER.to_string(),
            format!("title: {}", yaml_scalar(&self.title)),
            format!("description: {}", yaml_scalar(&self.description)),
            DELIMITER.to_string(),
            String::new(),
            format!("# {}", self.title),
            String::new(),
            format!("Content for {} goes here.", self.title),
            String::new(),
        ];

        let eol = line_ending.as_str();
        let mut out = String::new();
        for line in &lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }
}

/// Prepend a rendered header block to a document.
///
/// The original content follows the header verbatim.
pub fn stamp(source: &str, header: &HeaderBlock, line_ending: LineEnding) -> String {
    let mut out = header.render(line_ending);
    out.push_str(source);
    out
}

/// Emit a YAML scalar, double-quoting values that would not read back as a
/// plain string.
fn yaml_scalar(value: &str) -> Cow<'_, str> {
    if !needs_quotes(value) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn needs_quotes(value: &str) -> bool {
    const RESERVED: &[&str] = &[
        "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~",
    ];
    const INDICATORS: &str = "-?:,[]{}#&*!|>'\"%@`";

    let Some(first) = value.chars().next() else {
        return true;
    };

    if value.trim() != value || RESERVED.iter().any(|r| value.eq_ignore_ascii_case(r)) {
        return true;
    }

    // Numbers, dates and the like
    if (first.is_ascii_digit() || first == '+' || first == '.') && !value.contains(' ') {
        return true;
    }

    INDICATORS.contains(first)
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
        || value.contains(['\n', '\r', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn renders_fixed_template() {
        let header = HeaderBlock::for_title("Quick Start", "Solid");

        assert_eq!(
            header.render(LineEnding::Lf),
            "---\n\
             title: Quick Start\n\
             description: Learn about Quick Start in Solid\n\
             ---\n\
             \n\
             # Quick Start\n\
             \n\
             Content for Quick Start goes here.\n\
             \n"
        );
    }

    #[test]
    fn renders_crlf_template() {
        let header = HeaderBlock::for_title("A", "Solid");
        let rendered = header.render(LineEnding::CrLf);

        assert!(rendered.starts_with("---\r\ntitle: A\r\n"));
        assert!(rendered.ends_with("Content for A goes here.\r\n\r\n"));
        assert!(!rendered.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn stamps_original_content_after_header() {
        let header = HeaderBlock::for_title("A", "Solid");
        let out = stamp("hello", &header, LineEnding::Lf);

        assert!(out.starts_with("---\ntitle: A\ndescription: Learn about A in Solid\n---\n"));
        assert!(out.ends_with("Content for A goes here.\n\nhello"));
    }

    #[test]
    fn detects_line_endings() {
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn quotes_ambiguous_scalars() {
        assert_eq!(yaml_scalar("Quick Start"), "Quick Start");
        assert_eq!(yaml_scalar("01 Getting Started"), "01 Getting Started");
        assert_eq!(yaml_scalar("404"), "\"404\"");
        assert_eq!(yaml_scalar("Yes"), "\"Yes\"");
        assert_eq!(yaml_scalar("Null"), "\"Null\"");
        assert_eq!(yaml_scalar("Learn about A in Foo: Bar"), "\"Learn about A in Foo: Bar\"");
        assert_eq!(yaml_scalar("@scope/pkg"), "\"@scope/pkg\"");
        assert_eq!(yaml_scalar("say \"hi\""), "say \"hi\"");
        assert_eq!(yaml_scalar("\"hi\""), "\"\\\"hi\\\"\"");
        assert_eq!(yaml_scalar(""), "\"\"");
    }

    proptest! {
        #[test]
        fn stamped_documents_read_back(
            name in "[a-z0-9][a-z0-9_-]{0,16}\\.mdx?",
            body in "[ -~\n]{0,64}",
        ) {
            let title = crate::derive_title(&name);
            let header = HeaderBlock::for_title(title.clone(), "Solid");
            let out = stamp(&body, &header, LineEnding::detect(&body));

            prop_assert!(crate::has_header(&out));
            prop_assert!(out.ends_with(body.as_str()));

            let (fm, _) = crate::extract_frontmatter(&out).unwrap();
            let fm = fm.unwrap();
            prop_assert_eq!(fm.title, title);
            prop_assert_eq!(fm.description, Some(header.description.clone()));
        }
    }
}
