//! Content tree normalizer.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::document::{write_in_place, Document};

/// Content directory used when none is configured.
pub const DEFAULT_CONTENT_DIR: &str = "src/content/docs";

/// Extensions treated as content documents by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Framework name used in generated descriptions when none is configured.
pub const DEFAULT_FRAMEWORK: &str = "the framework";

/// Configuration for a normalizer run.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Content root to scan recursively
    pub root: PathBuf,

    /// File extensions to process, without the leading dot
    pub extensions: Vec<String>,

    /// Framework name used in generated descriptions
    pub framework: String,

    /// Classify files without writing anything
    pub dry_run: bool,

    /// Stop starting new files after the first per-file failure
    pub fail_fast: bool,

    /// Process files on the rayon thread pool
    pub parallel: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_CONTENT_DIR),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            framework: DEFAULT_FRAMEWORK.to_string(),
            dry_run: false,
            fail_fast: false,
            parallel: false,
        }
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// A header was generated (or would be, in a dry run)
    Stamped,

    /// The file already had a header
    Skipped,
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: NormalizeError,
}

/// Result of a normalizer run.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Files that received a header, in traversal order
    pub stamped: Vec<PathBuf>,

    /// Number of files left untouched because they already had a header
    pub skipped: usize,

    /// Files that failed to read or write
    pub failures: Vec<FileFailure>,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Whether this was a dry run
    pub dry_run: bool,

    /// Whether `fail_fast` stopped the run before every file was processed
    pub aborted: bool,
}

impl NormalizeReport {
    /// True when every matching file was processed without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<FileOutcome, NormalizeError>) {
        match result {
            Ok(FileOutcome::Stamped) => {
                if self.dry_run {
                    tracing::info!("Would add frontmatter to {}", path.display());
                } else {
                    tracing::info!("Added frontmatter to {}", path.display());
                }
                self.stamped.push(path);
            }
            Ok(FileOutcome::Skipped) => {
                tracing::debug!("Frontmatter present, skipping {}", path.display());
                self.skipped += 1;
            }
            Err(error) => {
                tracing::warn!("{}", error);
                self.failures.push(FileFailure { path, error });
            }
        }
    }
}

/// Errors that can occur while normalizing.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to traverse content directory: {0}")]
    Traversal(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("File is not valid UTF-8: {path}")]
    Decode { path: String },

    #[error("File is read-only: {path}")]
    ReadOnly { path: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Adds generated header blocks to documents that lack one.
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize every matching document under the content root.
    ///
    /// A missing or unreadable directory aborts the run. Per-file failures are
    /// collected in the report; with `fail_fast` no new file is started after
    /// the first one, and the report marks the run as aborted.
    pub fn run(&self) -> Result<NormalizeReport, NormalizeError> {
        let start = Instant::now();

        let files = self.discover()?;
        tracing::debug!(
            "Found {} documents under {}",
            files.len(),
            self.config.root.display()
        );

        let mut report = NormalizeReport {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        let stop = AtomicBool::new(false);
        let process = |path: &Path| -> Option<Result<FileOutcome, NormalizeError>> {
            if stop.load(Ordering::Relaxed) {
                return None;
            }

            let result = self.normalize_file(path);
            if result.is_err() && self.config.fail_fast {
                stop.store(true, Ordering::Relaxed);
            }
            Some(result)
        };

        if self.config.parallel {
            // Files already started when a failure stops the run still finish
            // and are recorded.
            let results: Vec<_> = files
                .into_par_iter()
                .map(|path| {
                    let result = process(&path);
                    (path, result)
                })
                .collect();

            for (path, result) in results {
                if let Some(result) = result {
                    report.record(path, result);
                }
            }
        } else {
            for path in files {
                let Some(result) = process(&path) else {
                    break;
                };
                report.record(path, result);
            }
        }

        report.aborted = stop.load(Ordering::Relaxed);
        if report.aborted {
            tracing::warn!("Stopping after first failure, remaining files left untouched");
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        Ok(report)
    }

    /// Normalize a single document.
    pub fn normalize_file(&self, path: &Path) -> Result<FileOutcome, NormalizeError> {
        let doc = Document::read(path)?;

        let Some(stamped) = doc.stamped(&self.config.framework) else {
            return Ok(FileOutcome::Skipped);
        };

        if !self.config.dry_run {
            write_in_place(path, &stamped)?;
        }

        Ok(FileOutcome::Stamped)
    }

    /// Find all matching documents under the content root, sorted by path.
    pub fn discover(&self) -> Result<Vec<PathBuf>, NormalizeError> {
        let root = &self.config.root;

        if !root.is_dir() {
            return Err(NormalizeError::DirectoryNotFound(
                root.display().to_string(),
            ));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| NormalizeError::Traversal(e.to_string()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            if self.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        self.config
            .extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.') == ext)
    }
}
