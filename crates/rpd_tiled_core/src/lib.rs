//! # `rpd_tiled_core`
//!
//! Conversion rules from tile maps to Remixed Pixel Dungeon level files.
//!
//! **This crate does NOT read or write files** - it works on the read-only
//! [`view`] traits and returns [`OutputDocument`]s. Loading Tiled files and
//! saving documents are handled by the crates around it.
//!
//! ## Architecture
//!
//! - **`rpd_tiled_assets`**: loads TMX/TSX files and adapts them to [`view`]
//! - **`rpd_tiled_core`** (this crate): layer roles, tile classification and
//!   the map/tileset exporters
//! - **`rpd_tiled_format`**: the save-file contract and format registry
//!
//! ## What this crate provides
//!
//! 1. **Views**: [`MapView`], [`LayerView`], [`TilesetView`], [`TileView`]
//! 2. **In-memory model**: [`model`] types implementing every view, for tests
//!    and programmatic maps
//! 3. **Map export**: [`MapExporter`] with logic/deco/mobs handling
//! 4. **Tileset export**: [`TilesetExporter`] over a pluggable [`TilesetConverter`]
//!
//! ## Example Usage
//!
//! ```rust
//! use rpd_tiled_core::prelude::*;
//!
//! let logic = MemoryTileset::new("logic").into_shared();
//! let map = MemoryMap::new(3, 1)
//!     .with_layer(MemoryLayer::new("logic", 3, 1).fill(&logic, &[7, 0, 8]));
//!
//! let document = MapExporter::default().export(&map).unwrap();
//! assert_eq!(document.get("entrance").unwrap(), &serde_json::json!([0, 0]));
//! assert_eq!(document.get("multiexit").unwrap(), &serde_json::json!([[2, 0]]));
//! ```

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod grid;
pub mod layer;
pub mod model;
pub mod path;
pub mod view;

pub mod prelude {
    //! Common imports for `rpd_tiled_core` users.

    pub use crate::classify::{SpecialTile, TileClass, classify};
    pub use crate::config::{ExportConfig, MobsTilesetPolicy};
    pub use crate::document::OutputDocument;
    pub use crate::error::ExportError;
    pub use crate::export::{
        MapExporter, PropertyDumpConverter, TiledJsonConverter, TilesetConverter, TilesetExporter,
    };
    pub use crate::layer::LayerRole;
    pub use crate::model::{MemoryLayer, MemoryMap, MemoryTile, MemoryTileset};
    pub use crate::view::{
        EMPTY_TILE, ImageRef, LayerKind, LayerView, MapView, Property, PropertyValue, TileId,
        TileView, TilesetGeometry, TilesetView,
    };
}

pub use document::OutputDocument;
pub use error::ExportError;
pub use export::{MapExporter, TilesetConverter, TilesetExporter};
pub use view::{LayerView, MapView, TileView, TilesetView};
