use std::path::Path;

use rpd_tiled_core::{MapExporter, OutputDocument};
use rpd_tiled_core::view::MapView;
use tracing::info;

use super::{MapFormat, RPD_SHORT_NAME};
use crate::config::{FormatConfig, WriterConfig};
use crate::error::FormatError;
use crate::save::write_document;

/// Writes maps as Remixed Pixel Dungeon level files.
#[derive(Debug, Clone, Default)]
pub struct RpdMapFormat {
    exporter: MapExporter,
    writer: WriterConfig,
}

impl RpdMapFormat {
    pub const NAME_FILTER: &'static str = "Remixed Pixel Dungeon levels (*.json)";

    pub fn new(exporter: MapExporter, writer: WriterConfig) -> Self {
        Self { exporter, writer }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(MapExporter::new(config.export.clone()), config.writer)
    }
}

impl MapFormat for RpdMapFormat {
    fn short_name(&self) -> &str {
        RPD_SHORT_NAME
    }

    fn name_filter(&self) -> &str {
        Self::NAME_FILTER
    }

    fn export(&self, map: &dyn MapView) -> Result<OutputDocument, FormatError> {
        Ok(self.exporter.export(map)?)
    }

    /// Validates the whole map before anything touches the filesystem.
    fn write(&self, map: &dyn MapView, path: &Path) -> Result<(), FormatError> {
        let document = MapFormat::export(self, map)?;
        write_document(&document, path, &self.writer)?;
        info!("Wrote level {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rpd_tiled_core::ExportError;
    use rpd_tiled_core::model::{MemoryLayer, MemoryMap, MemoryTileset};
    use serde_json::{Value, json};

    use super::*;

    fn level() -> MemoryMap {
        let logic = MemoryTileset::new("logic").into_shared();
        MemoryMap::new(2, 1).with_layer(MemoryLayer::new("logic", 2, 1).fill(&logic, &[7, 8]))
    }

    #[test]
    fn test_write_level() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("level.json");

        RpdMapFormat::default().write(&level(), &target).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(written["entrance"], json!([0, 0]));
        assert_eq!(written["multiexit"], json!([[1, 0]]));
        assert_eq!(written["tiles_logic"], json!("logic.png"));
    }

    #[test]
    fn test_invalid_map_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("level.json");
        let map = MemoryMap::new(1, 1).with_layer(MemoryLayer::new("logic", 1, 1));

        let error = RpdMapFormat::default().write(&map, &target).unwrap_err();

        assert!(matches!(
            error,
            FormatError::Export(ExportError::NoTileset { .. })
        ));
        assert_eq!(error.to_string(), "logic layer has no tiles, please fill it");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_format_metadata() {
        let format = RpdMapFormat::default();

        assert_eq!(format.short_name(), "RPD");
        assert_eq!(format.name_filter(), "Remixed Pixel Dungeon levels (*.json)");
        assert!(!format.supports_file(Path::new("level.json")));
    }
}
