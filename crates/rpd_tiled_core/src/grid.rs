//! Tile layer flattening.

use crate::view::{LayerView, TileId};

/// Flatten a tile layer into one row-major sequence of tile IDs.
///
/// Rows are the outer loop and columns the inner one, so the tile at `(x, y)`
/// lands at index `y * width + x`. The game decodes level arrays in exactly
/// this order. Empty cells keep the layer's empty marker.
pub fn flatten(layer: &dyn LayerView) -> Vec<TileId> {
    let (width, height) = (layer.width(), layer.height());
    let mut tiles = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            tiles.push(layer.tile_id(x, y));
        }
    }
    tiles
}
