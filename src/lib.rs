//! # `rpd_tiled`
//!
//! Export [Tiled](https://www.mapeditor.org/) maps and tilesets to the
//! Remixed Pixel Dungeon level format.
//!
//! This meta-crate re-exports the layered sub-crates:
//!
//! - [`rpd_tiled_assets`]: TMX/TSX loading and `tiled` adapters
//! - [`rpd_tiled_core`]: layer rules and document building
//! - [`rpd_tiled_format`]: atomic saving and the format registry
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use rpd_tiled::prelude::*;
//!
//! let config = RpdConfig::default();
//! let map = TiledLoader::new().load_map("levels/sewers.tmx").unwrap();
//! let format = RpdMapFormat::from_config(&config.format_config());
//! format
//!     .write(&TiledMapView::new(&map), Path::new("levels/sewers.json"))
//!     .unwrap();
//! ```

pub mod config;

pub use rpd_tiled_assets;
pub use rpd_tiled_core;
pub use rpd_tiled_format;

pub mod prelude {
    //! Everything needed to load, export and save.

    pub use crate::config::{ConfigError, LogConfig, RpdConfig};
    pub use rpd_tiled_assets::prelude::*;
    pub use rpd_tiled_core::prelude::*;
    pub use rpd_tiled_format::prelude::*;
}

pub use config::{ConfigError, RpdConfig};
