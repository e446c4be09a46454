//! Configuration file for the `rpd-export` tool.

use std::fs;
use std::path::{Path, PathBuf};

use rpd_tiled_core::config::ExportConfig;
use rpd_tiled_format::{FormatConfig, WriterConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Top-level configuration. Every section and field is optional in the file.
///
/// # Example
///
/// ```json
/// {
///   "export": { "mobs_tileset": "first_used", "water": "water3.png" },
///   "writer": { "safe_saving": false },
///   "log": { "filter": "rpd_tiled=debug" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpdConfig {
    pub export: ExportConfig,
    pub writer: WriterConfig,
    pub log: LogConfig,
}

impl RpdConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings the format registry builds formats from.
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            export: self.export.clone(),
            writer: self.writer,
        }
    }
}
