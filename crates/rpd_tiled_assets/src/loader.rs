//! TMX/TSX file loading.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load map {}: {source}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: tiled::Error,
    },

    #[error("Failed to load tileset {}: {source}", path.display())]
    Tileset {
        path: PathBuf,
        #[source]
        source: tiled::Error,
    },
}

/// Reads Tiled files from the filesystem.
///
/// External tilesets referenced by several maps are parsed once per loader;
/// reuse one loader when exporting a batch of maps.
pub struct TiledLoader {
    loader: tiled::Loader,
}

impl Default for TiledLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TiledLoader {
    pub fn new() -> Self {
        Self {
            loader: tiled::Loader::new(),
        }
    }

    /// Load a `.tmx` map and every tileset it references.
    pub fn load_map(&mut self, path: impl AsRef<Path>) -> Result<tiled::Map, LoadError> {
        let path = path.as_ref();
        debug!("Loading map {}", path.display());
        self.loader
            .load_tmx_map(path)
            .map_err(|source| LoadError::Map {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load a standalone `.tsx` tileset.
    pub fn load_tileset(&mut self, path: impl AsRef<Path>) -> Result<tiled::Tileset, LoadError> {
        let path = path.as_ref();
        debug!("Loading tileset {}", path.display());
        self.loader
            .load_tsx_tileset(path)
            .map_err(|source| LoadError::Tileset {
                path: path.to_path_buf(),
                source,
            })
    }
}
