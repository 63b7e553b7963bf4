use std::fs;
use std::path::{Path, PathBuf};

use consensus_core::MAX_NODE_NAME_LEN;
use serde::{Deserialize, Serialize};

use crate::cli::{Args, FormatArg};
use crate::error::{BlockdagError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub max_name_len: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("blockdag.in"),
            output: PathBuf::from("blockdag.out"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_name_len: MAX_NODE_NAME_LEN }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| BlockdagError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.graph.max_name_len == 0 {
            return Err(BlockdagError::Config("graph.max_name_len must be positive".to_string()));
        }
        Ok(())
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &Args) {
        if let Some(input) = &args.input {
            self.io.input = input.clone();
        }

        if let Some(output) = &args.output {
            self.io.output = output.clone();
        }

        if let Some(format) = args.format {
            self.output.format = format.into();
        }

        if let Some(level) = &args.log_level {
            self.log.level = level.clone();
        }
    }
}
