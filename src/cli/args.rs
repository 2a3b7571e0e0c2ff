//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Lacuna - Requirement extraction and document gap analysis.
#[derive(Debug, Parser)]
#[command(name = "lacuna")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a document against a requirements listing
    Check(CheckArgs),

    /// Select relevant catalog entities for a document
    Select(SelectArgs),

    /// Extract requirements from questionnaire documents
    Extract(ExtractArgs),

    /// Full review: select notebooks, gather requirements, analyze gaps
    Review(ReviewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Document to check (.txt or .md)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Requirements listing text file
    #[arg(short, long)]
    pub requirements: PathBuf,

    /// Report sections to render (comma-separated: gap, recommendations, all)
    #[arg(long, default_value = "all", value_delimiter = ',')]
    pub output: Vec<String>,

    /// Output the analysis as JSON instead of reports
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SelectArgs {
    /// Document whose content drives the selection
    #[arg(short, long, conflicts_with = "text")]
    pub document: Option<PathBuf>,

    /// Raw text to select against (alternative to --document)
    #[arg(long)]
    pub text: Option<String>,

    /// Entity catalog (JSON library file)
    #[arg(short, long, env = "LACUNA_LIBRARY")]
    pub library: PathBuf,

    /// Minimum relevance score for selection
    #[arg(long, default_value_t = crate::matcher::scoring::DEFAULT_THRESHOLD)]
    pub threshold: u32,
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Input file or directory (repeatable; directories are walked)
    #[arg(short, long, required = true)]
    pub input: Vec<PathBuf>,

    /// Output directory for requirements.json/.csv and the summary
    #[arg(short, long)]
    pub output_dir: PathBuf,
}

/// Arguments for the `review` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReviewArgs {
    /// Document to review (.txt or .md)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Entity catalog (JSON library file)
    #[arg(short, long, env = "LACUNA_LIBRARY")]
    pub library: PathBuf,

    /// Directory of pre-fetched answers (<entity-id>.txt)
    #[arg(long, conflicts_with = "ask_command")]
    pub answers_dir: Option<PathBuf>,

    /// Command template to fetch answers ({id} and {question} substituted)
    #[arg(long)]
    pub ask_command: Option<String>,

    /// Minimum relevance score for notebook selection
    #[arg(long, default_value_t = crate::matcher::scoring::DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Question depth: quick or detailed
    #[arg(long, default_value = "detailed")]
    pub depth: String,

    /// Report sections to render (comma-separated: gap, recommendations, all)
    #[arg(long, default_value = "all", value_delimiter = ',')]
    pub output: Vec<String>,

    /// Report file path (default: <document-stem>_alignment_report.md)
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
