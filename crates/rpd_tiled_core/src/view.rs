//! Read-only views over a host's map model.
//!
//! The exporter never owns map data. A host exposes its maps through these
//! object-safe traits: [`crate::model`] provides an owned implementation and
//! `rpd_tiled_assets` adapts the `tiled` crate.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// Tile ID stored in a cell, local to the tileset the cell uses.
///
/// Negative values mean "no tile".
pub type TileId = i32;

/// Marker returned for cells that hold no tile.
pub const EMPTY_TILE: TileId = -1;

/// A map: a fixed-size grid shared by an ordered stack of layers.
pub trait MapView {
    /// Map width in cells.
    fn width(&self) -> u32;

    /// Map height in cells.
    fn height(&self) -> u32;

    /// Top-level layers in stored order (bottom to top).
    fn layers(&self) -> Vec<Box<dyn LayerView + '_>>;
}

/// What a layer contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Grid of tile cells
    Tiles,
    /// Free-placed objects
    Objects,
    /// A single image
    Image,
    /// Container for other layers
    Group,
}

/// A single map layer.
pub trait LayerView {
    /// Layer name as set in the editor.
    fn name(&self) -> &str;

    /// Layer kind. Only [`LayerKind::Tiles`] layers carry cells.
    fn kind(&self) -> LayerKind;

    /// Grid width in cells (the map width).
    fn width(&self) -> u32;

    /// Grid height in cells (the map height).
    fn height(&self) -> u32;

    /// Tile ID at `(x, y)`, or [`EMPTY_TILE`] for an empty or out-of-range cell.
    fn tile_id(&self, x: u32, y: u32) -> TileId;

    /// Distinct tilesets referenced by this layer's cells.
    ///
    /// The order is deterministic for a given layer.
    fn used_tilesets(&self) -> Vec<Box<dyn TilesetView + '_>>;
}

/// Tileset grid layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TilesetGeometry {
    pub tile_width: u32,
    pub tile_height: u32,
    pub spacing: u32,
    pub margin: u32,
    /// Columns in the atlas image, 0 for image collections
    pub columns: u32,
    pub tile_count: u32,
}

/// Reference to an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Path as resolved by the host (usually absolute or relative to the working directory)
    pub source: PathBuf,
    pub width: i32,
    pub height: i32,
}

/// A named collection of tiles.
pub trait TilesetView {
    fn name(&self) -> &str;

    fn geometry(&self) -> TilesetGeometry;

    /// Atlas image, `None` for image-collection tilesets.
    fn image(&self) -> Option<ImageRef>;

    /// Tileset-level custom properties, sorted by name.
    fn properties(&self) -> Vec<Property>;

    /// All tiles the tileset defines, in ascending ID order.
    fn tiles(&self) -> Vec<Box<dyn TileView + '_>>;

    /// Look up a tile by its local ID.
    fn tile(&self, id: u32) -> Option<Box<dyn TileView + '_>>;
}

/// A single tile definition inside a tileset.
pub trait TileView {
    /// Local ID within the owning tileset.
    fn id(&self) -> u32;

    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// All custom properties, sorted by name.
    fn properties(&self) -> Vec<Property>;

    /// Per-tile image for image-collection tilesets.
    fn image(&self) -> Option<ImageRef>;

    /// Property rendered as text, empty when the property is not set.
    fn text_property(&self, name: &str) -> String {
        self.property(name)
            .map(|value| value.to_text())
            .unwrap_or_default()
    }
}

/// A named custom property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Typed custom property value, mirroring the editor's property types.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    /// Path to a file, relative to the file that declared it
    File(String),
    Color {
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
    },
    /// Reference to a map object by ID
    Object(u32),
    /// Instance of a custom class
    Class {
        property_type: String,
        properties: Vec<Property>,
    },
}

impl PropertyValue {
    /// The editor's type name for this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::File(_) => "file",
            PropertyValue::Color { .. } => "color",
            PropertyValue::Object(_) => "object",
            PropertyValue::Class { .. } => "class",
        }
    }

    /// Render the value as plain text.
    ///
    /// Class values have no text form and render as an empty string.
    pub fn to_text(&self) -> String {
        match self {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => f.to_string(),
            PropertyValue::String(s) | PropertyValue::File(s) => s.clone(),
            PropertyValue::Color {
                red,
                green,
                blue,
                alpha,
            } => format!("#{alpha:02x}{red:02x}{green:02x}{blue:02x}"),
            PropertyValue::Object(id) => id.to_string(),
            PropertyValue::Class { .. } => String::new(),
        }
    }

    /// Convert to the value stored in a JSON document.
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Bool(b) => Value::Bool(*b),
            PropertyValue::Int(i) => Value::from(*i),
            PropertyValue::Float(f) => Value::from(*f),
            PropertyValue::Object(id) => Value::from(*id),
            PropertyValue::Class { properties, .. } => {
                let members: Map<String, Value> = properties
                    .iter()
                    .map(|p| (p.name.clone(), p.value.to_json()))
                    .collect();
                Value::Object(members)
            }
            PropertyValue::String(_) | PropertyValue::File(_) | PropertyValue::Color { .. } => {
                Value::String(self.to_text())
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

// Views are usually handed out as boxed borrows of host data.

impl<T: LayerView + ?Sized> LayerView for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> LayerKind {
        (**self).kind()
    }

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn tile_id(&self, x: u32, y: u32) -> TileId {
        (**self).tile_id(x, y)
    }

    fn used_tilesets(&self) -> Vec<Box<dyn TilesetView + '_>> {
        (**self).used_tilesets()
    }
}

impl<T: TilesetView + ?Sized> TilesetView for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn geometry(&self) -> TilesetGeometry {
        (**self).geometry()
    }

    fn image(&self) -> Option<ImageRef> {
        (**self).image()
    }

    fn properties(&self) -> Vec<Property> {
        (**self).properties()
    }

    fn tiles(&self) -> Vec<Box<dyn TileView + '_>> {
        (**self).tiles()
    }

    fn tile(&self, id: u32) -> Option<Box<dyn TileView + '_>> {
        (**self).tile(id)
    }
}

impl<T: TileView + ?Sized> TileView for &T {
    fn id(&self) -> u32 {
        (**self).id()
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        (**self).property(name)
    }

    fn properties(&self) -> Vec<Property> {
        (**self).properties()
    }

    fn image(&self) -> Option<ImageRef> {
        (**self).image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_scalars() {
        assert_eq!(PropertyValue::Bool(true).to_text(), "true");
        assert_eq!(PropertyValue::Int(-3).to_text(), "-3");
        assert_eq!(PropertyValue::Float(1.5).to_text(), "1.5");
        assert_eq!(PropertyValue::Float(2.0).to_text(), "2");
        assert_eq!(PropertyValue::from("rat").to_text(), "rat");
        assert_eq!(PropertyValue::Object(12).to_text(), "12");
    }

    #[test]
    fn test_color_renders_argb() {
        let color = PropertyValue::Color {
            red: 255,
            green: 128,
            blue: 64,
            alpha: 255,
        };
        assert_eq!(color.to_text(), "#ffff8040");
        assert_eq!(color.to_json(), Value::String("#ffff8040".to_string()));
    }

    #[test]
    fn test_class_to_json_nests_members() {
        let value = PropertyValue::Class {
            property_type: "game::Loot".to_string(),
            properties: vec![Property::new("gold", 5), Property::new("cursed", false)],
        };
        assert_eq!(value.to_text(), "");
        assert_eq!(value.to_json(), serde_json::json!({"gold": 5, "cursed": false}));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(PropertyValue::Int(0).type_name(), "int");
        assert_eq!(PropertyValue::File("a.png".into()).type_name(), "file");
    }
}
