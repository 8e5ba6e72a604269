//! Configuration file structure (docstamp.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docstamp_normalize::{
    NormalizeConfig, DEFAULT_CONTENT_DIR, DEFAULT_EXTENSIONS, DEFAULT_FRAMEWORK,
};
use serde::Deserialize;

use crate::RunArgs;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub run: RunSettings,
}

#[derive(Debug, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Framework name used in generated descriptions
    #[serde(default = "default_framework")]
    pub framework: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            framework: default_framework(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RunSettings {
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_content_dir() -> String {
    DEFAULT_CONTENT_DIR.to_string()
}
fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
fn default_framework() -> String {
    DEFAULT_FRAMEWORK.to_string()
}

impl ConfigFile {
    /// Build a normalizer config, letting CLI flags override file values.
    pub fn normalize_config(self, args: &RunArgs) -> NormalizeConfig {
        NormalizeConfig {
            root: args
                .dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&self.content.dir)),
            extensions: self.content.extensions,
            framework: self.site.framework,
            dry_run: args.dry_run,
            fail_fast: args.fail_fast().unwrap_or(self.run.fail_fast),
            parallel: args.parallel().unwrap_or(self.run.parallel),
        }
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
