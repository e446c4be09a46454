//! Owned, in-memory map model implementing the [`crate::view`] traits.
//!
//! Useful for hosts that build maps programmatically and for tests.
//!
//! # Example
//!
//! ```rust
//! use rpd_tiled_core::model::{MemoryLayer, MemoryMap, MemoryTileset};
//!
//! let tileset = MemoryTileset::new("tiles0").into_shared();
//! let map = MemoryMap::new(2, 1).with_layer(MemoryLayer::new("base", 2, 1).fill(&tileset, &[0, 1]));
//! ```

use std::sync::Arc;

use crate::view::{
    EMPTY_TILE, ImageRef, LayerKind, LayerView, MapView, Property, PropertyValue, TileId,
    TileView, TilesetGeometry, TilesetView,
};

/// A map that owns its layers.
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    pub width: u32,
    pub height: u32,
    pub layers: Vec<MemoryLayer>,
}

impl MemoryMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Append a layer on top of the stack.
    pub fn with_layer(mut self, layer: MemoryLayer) -> Self {
        self.layers.push(layer);
        self
    }
}

impl MapView for MemoryMap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn layers(&self) -> Vec<Box<dyn LayerView + '_>> {
        self.layers
            .iter()
            .map(|layer| Box::new(layer) as Box<dyn LayerView + '_>)
            .collect()
    }
}

/// A cell holding a tile from a specific tileset.
#[derive(Debug, Clone)]
pub struct MemoryCell {
    pub tileset: Arc<MemoryTileset>,
    pub tile_id: u32,
}

/// A layer that owns its cells.
#[derive(Debug, Clone)]
pub struct MemoryLayer {
    pub name: String,
    pub kind: LayerKind,
    pub width: u32,
    pub height: u32,
    /// Row-major cells, `width * height` long
    pub cells: Vec<Option<MemoryCell>>,
}

impl MemoryLayer {
    /// Create an empty tile layer.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            kind: LayerKind::Tiles,
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Create a layer of a kind that holds no cells.
    pub fn without_cells(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Fill cells in row-major order with tiles from `tileset`.
    ///
    /// Negative IDs leave the cell empty; surplus IDs are ignored.
    pub fn fill(mut self, tileset: &Arc<MemoryTileset>, ids: &[TileId]) -> Self {
        for (cell, &id) in self.cells.iter_mut().zip(ids) {
            *cell = u32::try_from(id).ok().map(|tile_id| MemoryCell {
                tileset: Arc::clone(tileset),
                tile_id,
            });
        }
        self
    }

    /// Place a single tile. Out-of-range positions are ignored.
    pub fn set(&mut self, x: u32, y: u32, cell: Option<MemoryCell>) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = cell;
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }
}

impl LayerView for MemoryLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> LayerKind {
        self.kind
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile_id(&self, x: u32, y: u32) -> TileId {
        self.index(x, y)
            .and_then(|index| self.cells[index].as_ref())
            .and_then(|cell| TileId::try_from(cell.tile_id).ok())
            .unwrap_or(EMPTY_TILE)
    }

    /// Tilesets in order of first use (row-major).
    fn used_tilesets(&self) -> Vec<Box<dyn TilesetView + '_>> {
        let mut used: Vec<&Arc<MemoryTileset>> = Vec::new();
        for cell in self.cells.iter().flatten() {
            if !used.iter().any(|seen| Arc::ptr_eq(seen, &cell.tileset)) {
                used.push(&cell.tileset);
            }
        }
        used.into_iter()
            .map(|tileset| Box::new(tileset.as_ref()) as Box<dyn TilesetView + '_>)
            .collect()
    }
}

/// A tileset that owns its tile definitions.
#[derive(Debug, Clone, Default)]
pub struct MemoryTileset {
    pub name: String,
    pub geometry: TilesetGeometry,
    pub image: Option<ImageRef>,
    pub properties: Vec<Property>,
    /// Kept sorted by tile ID
    pub tiles: Vec<MemoryTile>,
}

impl MemoryTileset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_geometry(mut self, geometry: TilesetGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self.properties.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    /// Add or replace a tile definition.
    pub fn with_tile(mut self, tile: MemoryTile) -> Self {
        match self.tiles.binary_search_by_key(&tile.id, |t| t.id) {
            Ok(index) => self.tiles[index] = tile,
            Err(index) => self.tiles.insert(index, tile),
        }
        self
    }

    /// Wrap in an [`Arc`] so layers can share it.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl TilesetView for MemoryTileset {
    fn name(&self) -> &str {
        &self.name
    }

    fn geometry(&self) -> TilesetGeometry {
        self.geometry
    }

    fn image(&self) -> Option<ImageRef> {
        self.image.clone()
    }

    fn properties(&self) -> Vec<Property> {
        self.properties.clone()
    }

    fn tiles(&self) -> Vec<Box<dyn TileView + '_>> {
        self.tiles
            .iter()
            .map(|tile| Box::new(tile) as Box<dyn TileView + '_>)
            .collect()
    }

    fn tile(&self, id: u32) -> Option<Box<dyn TileView + '_>> {
        self.tiles
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|index| Box::new(&self.tiles[index]) as Box<dyn TileView + '_>)
    }
}

/// A tile definition with custom properties.
#[derive(Debug, Clone, Default)]
pub struct MemoryTile {
    pub id: u32,
    pub properties: Vec<Property>,
    pub image: Option<ImageRef>,
}

impl MemoryTile {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Set a property, replacing any previous value with the same name.
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.retain(|p| p.name != name);
        self.properties.push(Property::new(name, value));
        self.properties.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

impl TileView for MemoryTile {
    fn id(&self) -> u32 {
        self.id
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.clone())
    }

    fn properties(&self) -> Vec<Property> {
        self.properties.clone()
    }

    fn image(&self) -> Option<ImageRef> {
        self.image.clone()
    }
}
