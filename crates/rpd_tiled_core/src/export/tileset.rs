//! Tileset → document conversion.
//!
//! Tileset export has no game-specific rules: the exporter hands the tileset
//! to a [`TilesetConverter`] and returns whatever document it builds.

use std::path::Path;

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::document::OutputDocument;
use crate::path::{relative_to, to_slash_string};
use crate::view::{ImageRef, Property, PropertyValue, TileView, TilesetView};

/// Builds a document describing one tileset.
pub trait TilesetConverter {
    /// Convert `tileset`. Image paths are written relative to `output_dir`.
    fn convert(&self, tileset: &dyn TilesetView, output_dir: &Path) -> OutputDocument;
}

/// Exports tilesets through a [`TilesetConverter`].
#[derive(Debug, Clone)]
pub struct TilesetExporter<C = TiledJsonConverter> {
    converter: C,
}

impl Default for TilesetExporter {
    fn default() -> Self {
        Self::new(TiledJsonConverter)
    }
}

impl<C: TilesetConverter> TilesetExporter<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn export(&self, tileset: &dyn TilesetView, output_dir: &Path) -> OutputDocument {
        debug!(
            "Exporting tileset '{}' ({} tiles)",
            tileset.name(),
            tileset.geometry().tile_count
        );
        self.converter.convert(tileset, output_dir)
    }
}

/// Tiled-style JSON tileset: geometry, image references and typed properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiledJsonConverter;

impl TilesetConverter for TiledJsonConverter {
    fn convert(&self, tileset: &dyn TilesetView, output_dir: &Path) -> OutputDocument {
        let geometry = tileset.geometry();
        let mut document = OutputDocument::new();

        document.insert("name", tileset.name());
        document.insert("type", "tileset");
        document.insert("tilewidth", geometry.tile_width);
        document.insert("tileheight", geometry.tile_height);
        document.insert("spacing", geometry.spacing);
        document.insert("margin", geometry.margin);
        document.insert("columns", geometry.columns);
        document.insert("tilecount", geometry.tile_count);

        if let Some(image) = tileset.image() {
            insert_image(&mut document, &image, output_dir);
        }

        let properties = tileset.properties();
        if !properties.is_empty() {
            document.insert("properties", properties_to_json(&properties));
        }

        let tiles: Vec<Value> = tileset
            .tiles()
            .iter()
            .filter_map(|tile| tile_to_json(&**tile, output_dir))
            .collect();
        if !tiles.is_empty() {
            document.insert("tiles", tiles);
        }

        document
    }
}

fn insert_image(document: &mut OutputDocument, image: &ImageRef, output_dir: &Path) {
    let source = relative_to(&image.source, output_dir);
    document.insert("image", to_slash_string(&source));
    document.insert("imagewidth", image.width);
    document.insert("imageheight", image.height);
}

/// Tiles with neither properties nor their own image are left out.
fn tile_to_json(tile: &dyn TileView, output_dir: &Path) -> Option<Value> {
    let properties = tile.properties();
    let image = tile.image();
    if properties.is_empty() && image.is_none() {
        return None;
    }

    let mut object = OutputDocument::new();
    object.insert("id", tile.id());
    if let Some(image) = image {
        insert_image(&mut object, &image, output_dir);
    }
    if !properties.is_empty() {
        object.insert("properties", properties_to_json(&properties));
    }
    Some(object.into_value())
}

fn properties_to_json(properties: &[Property]) -> Value {
    properties
        .iter()
        .map(|property| {
            let mut entry = json!({
                "name": property.name,
                "type": property.value.type_name(),
                "value": property.value.to_json(),
            });
            if let PropertyValue::Class { property_type, .. } = &property.value {
                entry["propertytype"] = Value::String(property_type.clone());
            }
            entry
        })
        .collect()
}

/// Compact manifest: image name plus every tile's properties as text.
#[derive(Debug, Clone)]
pub struct PropertyDumpConverter {
    /// Appended to the tileset name to get its image file
    pub image_extension: String,
}

impl Default for PropertyDumpConverter {
    fn default() -> Self {
        Self {
            image_extension: ".png".to_string(),
        }
    }
}

impl TilesetConverter for PropertyDumpConverter {
    fn convert(&self, tileset: &dyn TilesetView, _output_dir: &Path) -> OutputDocument {
        let tiles: Vec<Value> = tileset
            .tiles()
            .iter()
            .map(|tile| {
                let properties: Map<String, Value> = tile
                    .properties()
                    .into_iter()
                    .map(|p| (p.name, Value::String(p.value.to_text())))
                    .collect();
                json!({ "id": tile.id(), "properties": properties })
            })
            .collect();

        let mut document = OutputDocument::new();
        document.insert("name", tileset.name());
        document.insert(
            "image",
            format!("{}{}", tileset.name(), self.image_extension),
        );
        document.insert("tiles", tiles);
        document
    }
}
