//! # `rpd_tiled_assets`
//!
//! Loads Tiled maps (`.tmx`) and tilesets (`.tsx`) with the `tiled` crate and
//! exposes them through the `rpd_tiled_core` view traits.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rpd_tiled_assets::prelude::*;
//! use rpd_tiled_core::MapExporter;
//!
//! let map = TiledLoader::new().load_map("levels/sewers.tmx").unwrap();
//! let document = MapExporter::default().export(&TiledMapView::new(&map)).unwrap();
//! println!("{}", document.to_pretty_json().unwrap());
//! ```

pub mod loader;
pub mod properties;
pub mod view;

pub mod prelude {
    //! Common imports for `rpd_tiled_assets` users.

    pub use crate::loader::{LoadError, TiledLoader};
    pub use crate::view::{TiledLayerView, TiledMapView, TiledTileView, TiledTilesetView};
}

pub use loader::{LoadError, TiledLoader};
pub use view::{TiledMapView, TiledTilesetView};
