//! Exporters turning [views](crate::view) into JSON documents.

pub mod map;
pub mod tileset;

pub use map::{DECO_DESC_PROPERTY, DECO_NAME_PROPERTY, MOB_KIND_PROPERTY, MapExporter};
pub use tileset::{PropertyDumpConverter, TiledJsonConverter, TilesetConverter, TilesetExporter};
