//! Title derivation from file names.

use std::path::Path;

/// Title used when a file name has no alphanumeric content at all.
pub const UNTITLED: &str = "Untitled";

/// Derive a human readable title from a file name.
///
/// The final extension is dropped, the stem is split on every non-alphanumeric
/// character and each remaining token gets its first letter uppercased.
/// `quick-start.mdx` becomes `Quick Start`.
pub fn derive_title(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };

    let title = stem
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Derive a title from the file name component of a path.
///
/// Parent directories never contribute, so `01_getting-started/setup.md` is
/// just `Setup`.
pub fn title_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| derive_title(&name.to_string_lossy()))
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
