use std::path::Path;

use rpd_tiled_core::export::{PropertyDumpConverter, TiledJsonConverter};
use rpd_tiled_core::view::TilesetView;
use rpd_tiled_core::{OutputDocument, TilesetConverter, TilesetExporter};
use tracing::info;

use super::{RPD_SHORT_NAME, TilesetFormat};
use crate::config::{FormatConfig, WriterConfig};
use crate::error::FormatError;
use crate::save::{parent_dir, write_document};

/// Writes tilesets as JSON next to Remixed Pixel Dungeon levels.
///
/// Image paths in the output are relative to the directory being written to.
#[derive(Debug, Clone)]
pub struct RpdTilesetFormat<C = TiledJsonConverter> {
    short_name: &'static str,
    name_filter: &'static str,
    exporter: TilesetExporter<C>,
    writer: WriterConfig,
}

impl Default for RpdTilesetFormat {
    fn default() -> Self {
        Self::new(TilesetExporter::default(), WriterConfig::default())
    }
}

impl RpdTilesetFormat {
    pub const NAME_FILTER: &'static str = "Json tileset files (*.json)";

    pub fn new(exporter: TilesetExporter, writer: WriterConfig) -> Self {
        Self {
            short_name: RPD_SHORT_NAME,
            name_filter: Self::NAME_FILTER,
            exporter,
            writer,
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(TilesetExporter::default(), config.writer)
    }
}

impl RpdTilesetFormat<PropertyDumpConverter> {
    pub const MANIFEST_SHORT_NAME: &'static str = "RPD-MANIFEST";
    pub const MANIFEST_NAME_FILTER: &'static str = "Tileset property manifests (*.json)";

    /// Compact manifest of tile properties instead of a full tileset.
    pub fn manifest(config: &FormatConfig) -> Self {
        let converter = PropertyDumpConverter {
            image_extension: config.export.image_extension.clone(),
        };
        Self {
            short_name: Self::MANIFEST_SHORT_NAME,
            name_filter: Self::MANIFEST_NAME_FILTER,
            exporter: TilesetExporter::new(converter),
            writer: config.writer,
        }
    }
}

impl<C> TilesetFormat for RpdTilesetFormat<C>
where
    C: TilesetConverter + Send + Sync,
{
    fn short_name(&self) -> &str {
        self.short_name
    }

    fn name_filter(&self) -> &str {
        self.name_filter
    }

    fn export(&self, tileset: &dyn TilesetView, output_dir: &Path) -> OutputDocument {
        self.exporter.export(tileset, output_dir)
    }

    fn write(&self, tileset: &dyn TilesetView, path: &Path) -> Result<(), FormatError> {
        let document = TilesetFormat::export(self, tileset, parent_dir(path));
        write_document(&document, path, &self.writer)?;
        info!("Wrote tileset '{}' to {}", tileset.name(), path.display());
        Ok(())
    }
}
