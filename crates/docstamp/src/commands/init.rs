//! Initialize docstamp configuration in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing docstamp...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Run 'docstamp' to add missing frontmatter.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# docstamp configuration

[content]
# Directory scanned recursively for documents
dir = "src/content/docs"

# File extensions treated as documents
extensions = ["md", "mdx"]

[site]
# Used in generated descriptions: "Learn about <Title> in <framework>"
framework = "the framework"

[run]
# Process files on a thread pool
parallel = false

# Stop at the first file that cannot be read or written
fail_fast = false
"#;
