//! TOML configuration file support.
//!
//! Input limits can be kept in a config file instead of passed as flags:
//!
//! ```toml
//! # ms2parse.toml
//! [parser]
//! max_lines = 50000000
//! max_bytes = 4294967296
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use ms2parse::ParserConfig;

/// Root configuration structure for ms2parse.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserSection,
}

/// The `[parser]` table.
#[derive(Debug, Default, Deserialize)]
pub struct ParserSection {
    /// Maximum number of input lines.
    pub max_lines: Option<usize>,

    /// Maximum number of input bytes.
    pub max_bytes: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Build the parser configuration, letting command-line values win.
    pub fn parser_config(&self, max_lines: Option<usize>, max_bytes: Option<u64>) -> ParserConfig {
        ParserConfig {
            max_lines: max_lines.or(self.parser.max_lines),
            max_bytes: max_bytes.or(self.parser.max_bytes),
        }
    }
}
