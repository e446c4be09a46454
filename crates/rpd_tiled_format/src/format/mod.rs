//! Host-facing format plugins.
//!
//! A host picks a format by short name or by file name, then calls `write`.
//! Both Remixed Pixel Dungeon formats are write-only.

use std::path::Path;

use rpd_tiled_core::OutputDocument;
use rpd_tiled_core::model::MemoryTileset;
use rpd_tiled_core::view::{MapView, TilesetView};

use crate::error::FormatError;

pub mod map;
pub mod tileset;

pub use map::RpdMapFormat;
pub use tileset::RpdTilesetFormat;

/// Short name shared by the Remixed Pixel Dungeon formats.
pub const RPD_SHORT_NAME: &str = "RPD";

/// A format maps can be written in.
pub trait MapFormat: Send + Sync {
    fn short_name(&self) -> &str;

    /// File dialog filter, e.g. `"Levels (*.json)"`.
    fn name_filter(&self) -> &str;

    /// Whether this format can read `path`.
    fn supports_file(&self, _path: &Path) -> bool {
        false
    }

    /// Build the document `write` would save, without touching the filesystem.
    fn export(&self, map: &dyn MapView) -> Result<OutputDocument, FormatError>;

    fn write(&self, map: &dyn MapView, path: &Path) -> Result<(), FormatError>;
}

/// A format tilesets can be written in.
pub trait TilesetFormat: Send + Sync {
    fn short_name(&self) -> &str;

    fn name_filter(&self) -> &str;

    fn supports_file(&self, _path: &Path) -> bool {
        false
    }

    /// Read a tileset back. Write-only formats return `None`.
    fn read(&self, _path: &Path) -> Option<MemoryTileset> {
        None
    }

    /// Build the document for a file in `output_dir`.
    fn export(&self, tileset: &dyn TilesetView, output_dir: &Path) -> OutputDocument;

    fn write(&self, tileset: &dyn TilesetView, path: &Path) -> Result<(), FormatError>;
}

/// Extensions listed in a name filter: `"Levels (*.json *.rpd)"` gives
/// `["json", "rpd"]`.
pub fn filter_extensions(name_filter: &str) -> Vec<&str> {
    let Some(start) = name_filter.rfind('(') else {
        return Vec::new();
    };
    let patterns = &name_filter[start + 1..];
    let patterns = patterns.split(')').next().unwrap_or_default();
    patterns
        .split_whitespace()
        .filter_map(|pattern| pattern.strip_prefix("*."))
        .collect()
}

/// Whether `path` has one of the extensions in `name_filter`.
pub fn matches_filter(name_filter: &str, path: &Path) -> bool {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    filter_extensions(name_filter)
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(extension))
}
