//! Frontmatter audit command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use docstamp_normalize::Normalizer;

use crate::config::load_config;
use crate::RunArgs;

/// Run the check command.
pub fn run(config_path: &Path, dir: Option<PathBuf>) -> Result<()> {
    let args = RunArgs {
        dir,
        ..Default::default()
    };
    let normalizer = Normalizer::new(load_config(config_path)?.normalize_config(&args));

    tracing::info!(
        "Checking frontmatter in {}...",
        normalizer.config().root.display()
    );

    let report = normalizer.audit()?;

    for path in &report.missing {
        tracing::warn!("Missing frontmatter: {}", path.display());
    }
    for entry in &report.malformed {
        tracing::warn!("Malformed frontmatter: {}: {}", entry.path.display(), entry.message);
    }

    tracing::info!(
        "Checked {} documents: {} valid, {} missing, {} malformed, {} unreadable",
        report.valid + report.missing.len() + report.malformed.len() + report.failures.len(),
        report.valid,
        report.missing.len(),
        report.malformed.len(),
        report.failures.len()
    );

    if !report.is_clean() {
        anyhow::bail!("Frontmatter check failed. Run 'docstamp run' to add missing headers.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn passes_on_clean_tree() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.md"), "---\ntitle: A\n---\n").unwrap();

        let result = run(
            &temp.path().join("docstamp.toml"),
            Some(temp.path().to_path_buf()),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn fails_on_missing_header_without_writing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.md"), "hello").unwrap();

        let result = run(
            &temp.path().join("docstamp.toml"),
            Some(temp.path().to_path_buf()),
        );

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(temp.path().join("a.md")).unwrap(), "hello");
    }
}
