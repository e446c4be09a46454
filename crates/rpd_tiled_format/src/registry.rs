//! Link-time registry of the available formats.
//!
//! Formats announce themselves with `inventory::submit!`; the registry is
//! assembled on demand and hands out freshly configured format instances.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::config::FormatConfig;
use crate::format::{MapFormat, RpdMapFormat, RpdTilesetFormat, TilesetFormat, matches_filter};

/// Builds a format from the shared configuration.
#[derive(Clone, Copy)]
pub enum FormatFactory {
    Map(fn(&FormatConfig) -> Box<dyn MapFormat>),
    Tileset(fn(&FormatConfig) -> Box<dyn TilesetFormat>),
}

/// A format submitted with `inventory::submit!`.
pub struct FormatRegistration {
    /// Name a host selects the format by, unique per format kind
    pub short_name: &'static str,
    /// One-line description for listings
    pub description: &'static str,
    pub factory: FormatFactory,
}

inventory::collect!(FormatRegistration);

fn rpd_map_format(config: &FormatConfig) -> Box<dyn MapFormat> {
    Box::new(RpdMapFormat::from_config(config))
}

fn rpd_tileset_format(config: &FormatConfig) -> Box<dyn TilesetFormat> {
    Box::new(RpdTilesetFormat::from_config(config))
}

fn rpd_manifest_format(config: &FormatConfig) -> Box<dyn TilesetFormat> {
    Box::new(RpdTilesetFormat::manifest(config))
}

inventory::submit! {
    FormatRegistration {
        short_name: crate::format::RPD_SHORT_NAME,
        description: "Remixed Pixel Dungeon level",
        factory: FormatFactory::Map(rpd_map_format),
    }
}

inventory::submit! {
    FormatRegistration {
        short_name: crate::format::RPD_SHORT_NAME,
        description: "Tiled-style JSON tileset",
        factory: FormatFactory::Tileset(rpd_tileset_format),
    }
}

inventory::submit! {
    FormatRegistration {
        short_name: RpdTilesetFormat::MANIFEST_SHORT_NAME,
        description: "Tile property manifest",
        factory: FormatFactory::Tileset(rpd_manifest_format),
    }
}

/// All registered formats, keyed by short name.
///
/// # Example
///
/// ```rust
/// use rpd_tiled_format::{FormatConfig, FormatRegistry};
///
/// let registry = FormatRegistry::build();
/// let format = registry.map_format("rpd", &FormatConfig::default()).unwrap();
/// assert_eq!(format.short_name(), "RPD");
/// ```
pub struct FormatRegistry {
    maps: BTreeMap<&'static str, &'static FormatRegistration>,
    tilesets: BTreeMap<&'static str, &'static FormatRegistration>,
}

impl FormatRegistry {
    /// Build the registry from all inventory submissions.
    pub fn build() -> Self {
        let mut maps = BTreeMap::new();
        let mut tilesets = BTreeMap::new();

        for registration in inventory::iter::<FormatRegistration> {
            let formats = match registration.factory {
                FormatFactory::Map(_) => &mut maps,
                FormatFactory::Tileset(_) => &mut tilesets,
            };
            formats.insert(registration.short_name, registration);
        }

        info!(
            "FormatRegistry built with {} map formats and {} tileset formats",
            maps.len(),
            tilesets.len()
        );

        Self { maps, tilesets }
    }

    /// Map format by short name, ignoring ASCII case.
    pub fn map_format(&self, short_name: &str, config: &FormatConfig) -> Option<Box<dyn MapFormat>> {
        find(&self.maps, short_name).and_then(|registration| match registration.factory {
            FormatFactory::Map(factory) => Some(factory(config)),
            FormatFactory::Tileset(_) => None,
        })
    }

    /// Tileset format by short name, ignoring ASCII case.
    pub fn tileset_format(
        &self,
        short_name: &str,
        config: &FormatConfig,
    ) -> Option<Box<dyn TilesetFormat>> {
        find(&self.tilesets, short_name).and_then(|registration| match registration.factory {
            FormatFactory::Tileset(factory) => Some(factory(config)),
            FormatFactory::Map(_) => None,
        })
    }

    /// First map format, by short name, whose name filter matches `path`.
    pub fn map_format_for(&self, path: &Path, config: &FormatConfig) -> Option<Box<dyn MapFormat>> {
        self.maps
            .keys()
            .filter_map(|name| self.map_format(name, config))
            .find(|format| matches_filter(format.name_filter(), path))
    }

    /// First tileset format, by short name, whose name filter matches `path`.
    pub fn tileset_format_for(
        &self,
        path: &Path,
        config: &FormatConfig,
    ) -> Option<Box<dyn TilesetFormat>> {
        self.tilesets
            .keys()
            .filter_map(|name| self.tileset_format(name, config))
            .find(|format| matches_filter(format.name_filter(), path))
    }

    /// Registered map formats in short-name order.
    pub fn map_formats(&self) -> impl Iterator<Item = &'static FormatRegistration> + '_ {
        self.maps.values().copied()
    }

    /// Registered tileset formats in short-name order.
    pub fn tileset_formats(&self) -> impl Iterator<Item = &'static FormatRegistration> + '_ {
        self.tilesets.values().copied()
    }

    pub fn len(&self) -> usize {
        self.maps.len() + self.tilesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty() && self.tilesets.is_empty()
    }
}

fn find(
    formats: &BTreeMap<&'static str, &'static FormatRegistration>,
    short_name: &str,
) -> Option<&'static FormatRegistration> {
    formats
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(short_name))
        .map(|(_, registration)| *registration)
}
