//! # `rpd_tiled_format`
//!
//! Host-facing plugin surface for the Remixed Pixel Dungeon exporters.
//!
//! - [`MapFormat`] / [`TilesetFormat`]: what a host calls to save a map or tileset
//! - [`SaveFile`]: write-to-temporary-then-rename file saving
//! - [`FormatRegistry`]: formats registered at link time with `inventory`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use rpd_tiled_core::model::{MemoryLayer, MemoryMap, MemoryTileset};
//! use rpd_tiled_format::prelude::*;
//!
//! let tiles = MemoryTileset::new("tiles0").into_shared();
//! let map = MemoryMap::new(1, 1).with_layer(MemoryLayer::new("base", 1, 1).fill(&tiles, &[0]));
//!
//! let registry = FormatRegistry::build();
//! let format = registry
//!     .map_format_for(Path::new("level.json"), &FormatConfig::default())
//!     .unwrap();
//! if let Err(error) = format.write(&map, Path::new("level.json")) {
//!     eprintln!("{error}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod save;

pub mod prelude {
    //! Common imports for `rpd_tiled_format` users.

    pub use crate::config::{FormatConfig, WriterConfig};
    pub use crate::error::FormatError;
    pub use crate::format::{MapFormat, RpdMapFormat, RpdTilesetFormat, TilesetFormat};
    pub use crate::registry::{FormatFactory, FormatRegistration, FormatRegistry};
    pub use crate::save::{SaveFile, write_document};
}

pub use config::{FormatConfig, WriterConfig};
pub use error::FormatError;
pub use format::{MapFormat, TilesetFormat};
pub use registry::FormatRegistry;
pub use save::SaveFile;
