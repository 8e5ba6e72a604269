//! Frontmatter normalization command.

use std::path::Path;

use anyhow::Result;
use docstamp_normalize::Normalizer;

use crate::config::load_config;
use crate::RunArgs;

/// Run the normalize command.
pub fn run(config_path: &Path, args: RunArgs) -> Result<()> {
    let normalizer = Normalizer::new(load_config(config_path)?.normalize_config(&args));

    tracing::info!(
        "Normalizing frontmatter in {}...",
        normalizer.config().root.display()
    );

    let report = normalizer.run()?;

    let verb = if report.dry_run {
        "would be updated"
    } else {
        "updated"
    };
    tracing::info!(
        "Frontmatter normalization complete: {} {}, {} already present, {} failed in {}ms",
        report.stamped.len(),
        verb,
        report.skipped,
        report.failures.len(),
        report.duration_ms
    );

    if let Some(failure) = report.failures.first().filter(|_| report.aborted) {
        anyhow::bail!("Stopped at first failure: {}", failure.error);
    }
    if !report.is_clean() {
        anyhow::bail!("{} file(s) could not be processed", report.failures.len());
    }

    Ok(())
}
