//! [`rpd_tiled_core::view`] adapters over `tiled` maps and tilesets.
//!
//! The adapters borrow the loaded data; nothing is copied until the exporter
//! asks for it.

use std::collections::BTreeSet;

use rpd_tiled_core::view::{
    EMPTY_TILE, ImageRef, LayerKind, LayerView, MapView, Property, PropertyValue, TileId,
    TileView, TilesetGeometry, TilesetView,
};
use tiled::LayerType;
use tracing::warn;

use crate::properties::{convert_properties, convert_value};

/// A loaded `tiled::Map` seen as a [`MapView`].
#[derive(Clone, Copy)]
pub struct TiledMapView<'map> {
    map: &'map tiled::Map,
}

impl<'map> TiledMapView<'map> {
    pub fn new(map: &'map tiled::Map) -> Self {
        Self { map }
    }
}

impl MapView for TiledMapView<'_> {
    fn width(&self) -> u32 {
        self.map.width
    }

    fn height(&self) -> u32 {
        self.map.height
    }

    fn layers(&self) -> Vec<Box<dyn LayerView + '_>> {
        self.map
            .layers()
            .map(|layer| {
                Box::new(TiledLayerView {
                    map: self.map,
                    layer,
                }) as Box<dyn LayerView + '_>
            })
            .collect()
    }
}

/// One top-level layer of a [`TiledMapView`].
///
/// Layers span the whole map; cells outside a finite layer's data read as empty.
pub struct TiledLayerView<'map> {
    map: &'map tiled::Map,
    layer: tiled::Layer<'map>,
}

impl LayerView for TiledLayerView<'_> {
    fn name(&self) -> &str {
        &self.layer.name
    }

    fn kind(&self) -> LayerKind {
        match self.layer.layer_type() {
            LayerType::Tiles(_) => LayerKind::Tiles,
            LayerType::Objects(_) => LayerKind::Objects,
            LayerType::Image(_) => LayerKind::Image,
            LayerType::Group(_) => LayerKind::Group,
        }
    }

    fn width(&self) -> u32 {
        self.map.width
    }

    fn height(&self) -> u32 {
        self.map.height
    }

    fn tile_id(&self, x: u32, y: u32) -> TileId {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return EMPTY_TILE;
        };
        self.layer
            .as_tile_layer()
            .and_then(|tiles| tiles.get_tile(x, y))
            .and_then(|tile| TileId::try_from(tile.id()).ok())
            .unwrap_or(EMPTY_TILE)
    }

    /// Tilesets in the order the map declares them.
    fn used_tilesets(&self) -> Vec<Box<dyn TilesetView + '_>> {
        let Some(tiles) = self.layer.as_tile_layer() else {
            return Vec::new();
        };

        let mut indices = BTreeSet::new();
        for y in 0..self.map.height {
            for x in 0..self.map.width {
                let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
                    continue;
                };
                if let Some(tile) = tiles.get_tile(x, y) {
                    indices.insert(tile.tileset_index());
                }
            }
        }

        let tilesets = self.map.tilesets();
        indices
            .into_iter()
            .filter_map(|index| {
                let tileset = tilesets.get(index);
                if tileset.is_none() {
                    warn!(
                        "Layer '{}' references tileset index {} which doesn't exist",
                        self.layer.name, index
                    );
                }
                tileset
            })
            .map(|tileset| Box::new(TiledTilesetView::new(tileset)) as Box<dyn TilesetView + '_>)
            .collect()
    }
}

/// A `tiled::Tileset` seen as a [`TilesetView`].
#[derive(Clone, Copy)]
pub struct TiledTilesetView<'ts> {
    tileset: &'ts tiled::Tileset,
}

impl<'ts> TiledTilesetView<'ts> {
    pub fn new(tileset: &'ts tiled::Tileset) -> Self {
        Self { tileset }
    }
}

fn image_ref(image: &tiled::Image) -> ImageRef {
    ImageRef {
        source: image.source.clone(),
        width: image.width,
        height: image.height,
    }
}

impl TilesetView for TiledTilesetView<'_> {
    fn name(&self) -> &str {
        &self.tileset.name
    }

    fn geometry(&self) -> TilesetGeometry {
        TilesetGeometry {
            tile_width: self.tileset.tile_width,
            tile_height: self.tileset.tile_height,
            spacing: self.tileset.spacing,
            margin: self.tileset.margin,
            columns: self.tileset.columns,
            tile_count: self.tileset.tilecount,
        }
    }

    fn image(&self) -> Option<ImageRef> {
        self.tileset.image.as_ref().map(image_ref)
    }

    fn properties(&self) -> Vec<Property> {
        convert_properties(&self.tileset.properties)
    }

    fn tiles(&self) -> Vec<Box<dyn TileView + '_>> {
        let mut tiles: Vec<TiledTileView<'_>> = self
            .tileset
            .tiles()
            .map(|(id, tile)| TiledTileView { id, tile })
            .collect();
        tiles.sort_by_key(|tile| tile.id);
        tiles
            .into_iter()
            .map(|tile| Box::new(tile) as Box<dyn TileView + '_>)
            .collect()
    }

    fn tile(&self, id: u32) -> Option<Box<dyn TileView + '_>> {
        self.tileset
            .get_tile(id)
            .map(|tile| Box::new(TiledTileView { id, tile }) as Box<dyn TileView + '_>)
    }
}

/// A single tile of a [`TiledTilesetView`].
pub struct TiledTileView<'ts> {
    id: u32,
    tile: tiled::Tile<'ts>,
}

impl TileView for TiledTileView<'_> {
    fn id(&self) -> u32 {
        self.id
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.tile.properties.get(name).map(convert_value)
    }

    fn properties(&self) -> Vec<Property> {
        convert_properties(&self.tile.properties)
    }

    fn image(&self) -> Option<ImageRef> {
        self.tile.image.as_ref().map(image_ref)
    }
}
