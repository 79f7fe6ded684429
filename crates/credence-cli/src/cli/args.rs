//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use credence::Preset;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Credibility checker for news articles
///
/// Scores an article from its source, byline, citations, tone and headline,
/// and explains every point it gives or takes.
/// Use --explain to learn what each check looks for.
#[derive(Parser, Debug)]
#[command(name = "credence")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Scoring preset (standard, classic, balanced)
    #[arg(short, long, env = "CREDENCE_PRESET", global = true)]
    pub preset: Option<Preset>,

    /// TOML scoring configuration; overrides the preset
    #[arg(short, long, env = "CREDENCE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what the checks do (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an article URL or article text
    Analyze(AnalyzeArgs),

    /// Start interactive shell mode
    Shell,

    /// List the built-in scoring presets
    Presets,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Analyze command
// ============================================================================

#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["input", "file", "stdin"]),
))]
pub struct AnalyzeArgs {
    /// Article URL (http:// or https://) or the article text itself
    pub input: Option<String>,

    /// Read article text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Read article text from standard input
    #[arg(long)]
    pub stdin: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., preset, output_format, config_file)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
