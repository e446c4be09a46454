use thiserror::Error;

use crate::view::TileId;

/// A map that cannot be expressed as a level.
///
/// Export stops at the first error; no partial document is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("{layer} layer has no tiles, please fill it")]
    NoTileset { layer: String },

    #[error("Only one tileset per layer supported ({layer} layer)")]
    MultipleTilesets { layer: String, count: usize },

    #[error("Hole in logic layer at ({x}, {y})")]
    Hole { x: u32, y: u32 },

    #[error("'kind' property not defined for mob, position in tileset : {tile_id}")]
    MissingMobKind { tile_id: TileId },

    #[error("{layer} layer must be a tile layer")]
    NotATileLayer { layer: String },
}
