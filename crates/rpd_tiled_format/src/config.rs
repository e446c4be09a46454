//! Writer and format configuration.

use rpd_tiled_core::config::ExportConfig;
use serde::{Deserialize, Serialize};

/// How documents are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Write to a temporary file and rename it over the target on success.
    ///
    /// When disabled the target is truncated and written in place, which also
    /// works on filesystems that refuse renames.
    pub safe_saving: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { safe_saving: true }
    }
}

/// Everything a format needs to build itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub export: ExportConfig,
    pub writer: WriterConfig,
}
