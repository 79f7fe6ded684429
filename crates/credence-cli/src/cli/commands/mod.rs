//! Command implementations.

pub mod analyze;
pub mod config;
pub mod presets;
pub mod shell;

use anyhow::{Context as _, Result};
use credence::{Analyzer, Preset, ScoringConfig};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Scoring preset
    pub preset: Preset,

    /// Scoring configuration file, replaces the preset when set
    pub config_file: Option<PathBuf>,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Resolve the scoring configuration from the file or the preset.
    pub fn scoring_config(&self) -> Result<ScoringConfig> {
        match &self.config_file {
            Some(path) => ScoringConfig::load(path)
                .with_context(|| format!("Failed to load scoring config {}", path.display())),
            None => Ok(self.preset.config()),
        }
    }

    /// Create an analyzer for the resolved configuration.
    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::builder().config(self.scoring_config()?).build()?)
    }
}
