//! docstamp CLI - adds missing frontmatter to documentation content.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "docstamp")]
#[command(about = "Add missing frontmatter to Markdown and MDX documentation")]
#[command(version)]
pub struct Cli {
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to docstamp.toml config file
    #[arg(short, long, default_value = "docstamp.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add frontmatter to every document that lacks it
    Run(RunArgs),

    /// Report documents with missing or malformed frontmatter
    Check {
        /// Content directory (defaults to config or "src/content/docs")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Write a default docstamp.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Content directory (defaults to config or "src/content/docs")
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first file that cannot be processed
    #[arg(long, overrides_with = "no_fail_fast")]
    pub fail_fast: bool,

    /// Keep going past files that cannot be processed
    #[arg(long, overrides_with = "fail_fast")]
    pub no_fail_fast: bool,

    /// Process files in parallel
    #[arg(long, overrides_with = "no_parallel")]
    pub parallel: bool,

    /// Process files one at a time
    #[arg(long, overrides_with = "parallel")]
    pub no_parallel: bool,
}

impl RunArgs {
    /// `--fail-fast` / `--no-fail-fast`, if either was given.
    pub fn fail_fast(&self) -> Option<bool> {
        flag_pair(self.fail_fast, self.no_fail_fast)
    }

    /// `--parallel` / `--no-parallel`, if either was given.
    pub fn parallel(&self) -> Option<bool> {
        flag_pair(self.parallel, self.no_parallel)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        None => {
            commands::run::run(&cli.config, RunArgs::default())?;
        }
        Some(Commands::Run(args)) => {
            commands::run::run(&cli.config, args)?;
        }
        Some(Commands::Check { dir }) => {
            commands::check::run(&cli.config, dir)?;
        }
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.config, yes)?;
        }
    }

    Ok(())
}
