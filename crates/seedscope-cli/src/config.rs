//! CLI configuration from an optional TOML file plus command-line overrides.
//!
//! Priority: command-line flags > config file > defaults.

use anyhow::{Context, Result};
use seedscope_core::Wordlist;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where the wordlist comes from
    #[serde(default)]
    pub wordlist: WordlistSection,

    /// How results are printed
    #[serde(default)]
    pub output: OutputSection,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            wordlist: WordlistSection::default(),
            output: OutputSection::default(),
        }
    }
}

/// Wordlist source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordlistSection {
    /// Plain-text wordlist, one word per line. Uses the built-in English
    /// list when unset.
    pub path: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the educational notes after a text report
    #[serde(default = "default_notes")]
    pub notes: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            notes: default_notes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_notes() -> bool {
    true
}

// ============================================================================
// Loading & validation
// ============================================================================

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()),
            "log_level must be one of {}, got {:?}",
            LOG_LEVELS.join("/"),
            self.log_level
        );

        if let Some(ref path) = self.wordlist.path {
            anyhow::ensure!(
                !path.as_os_str().is_empty(),
                "wordlist.path must not be empty"
            );
        }

        Ok(())
    }

    /// Load the configured wordlist, or the built-in English list.
    pub fn load_wordlist(&self) -> Result<Wordlist> {
        match self.wordlist.path {
            Some(ref path) => Wordlist::from_file(path)
                .with_context(|| format!("Failed to load wordlist from {}", path.display())),
            None => Ok(Wordlist::english()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
