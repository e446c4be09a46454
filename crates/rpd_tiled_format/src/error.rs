use std::io;

use rpd_tiled_core::ExportError;
use thiserror::Error;

/// Failure of a format `write`.
///
/// The `Display` text is what a host shows as the format's error string.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Could not open file for writing.")]
    Open(#[source] io::Error),

    #[error("Error while writing file:\n{0}")]
    Write(#[source] io::Error),

    #[error("{0}")]
    Commit(#[source] io::Error),

    /// Serializing a built document failed; this is a bug, not bad input.
    #[error("Could not serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
