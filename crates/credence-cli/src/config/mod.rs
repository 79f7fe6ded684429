//! Configuration management.

use anyhow::Result;
use credence::Preset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default scoring preset.
    pub preset: Option<Preset>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Scoring configuration file used when `--config` is not given.
    pub config_file: Option<PathBuf>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("rs", "credence", "credence")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Apply `key = value`, as given to `credence config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "preset" => self.preset = Some(value.parse()?),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "config_file" | "config" => {
                self.config_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "explain_by_default" | "explain" => self.explain_by_default = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 preset             - Default scoring preset (standard/classic/balanced)\n  \
                 output_format      - Default output format (pretty/text/markdown/json/yaml)\n  \
                 config_file        - Scoring configuration TOML file (empty to clear)\n  \
                 explain_by_default - Always explain the checks (true/false)",
                key
            ),
        }

        Ok(())
    }
}
