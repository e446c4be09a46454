//! Exporter configuration.

use serde::{Deserialize, Serialize};

/// How the `mobs` layer picks its tileset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobsTilesetPolicy {
    /// Exactly one tileset, like `logic` and `deco`
    #[default]
    Strict,
    /// First used tileset; only an empty layer fails
    FirstUsed,
}

/// Configuration for [`MapExporter`](crate::export::MapExporter).
///
/// # Example
///
/// ```rust
/// use rpd_tiled_core::config::{ExportConfig, MobsTilesetPolicy};
///
/// let config = ExportConfig {
///     mobs_tileset: MobsTilesetPolicy::FirstUsed,
///     ..Default::default()
/// };
/// assert_eq!(config.water, "water0.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Decoration atlas used when the map has no `deco` layer
    pub default_tiles: String,
    /// Water texture, always written
    pub water: String,
    /// Appended to a tileset name to get its image file
    pub image_extension: String,
    pub mobs_tileset: MobsTilesetPolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_tiles: "tiles0_x.png".to_string(),
            water: "water0.png".to_string(),
            image_extension: ".png".to_string(),
            mobs_tileset: MobsTilesetPolicy::default(),
        }
    }
}

impl ExportConfig {
    /// Image file name for a tileset.
    pub fn image_name(&self, tileset_name: &str) -> String {
        format!("{tileset_name}{}", self.image_extension)
    }
}
