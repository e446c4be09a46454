//! Map → level document conversion.

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::classify::{TileClass, classify};
use crate::config::{ExportConfig, MobsTilesetPolicy};
use crate::document::{OutputDocument, keys};
use crate::error::ExportError;
use crate::grid::flatten;
use crate::layer::LayerRole;
use crate::view::{LayerKind, LayerView, MapView, TilesetView};

/// Decoration tile property holding its display name.
pub const DECO_NAME_PROPERTY: &str = "deco_name";
/// Decoration tile property holding its description.
pub const DECO_DESC_PROPERTY: &str = "deco_desc";
/// Mob tile property holding the mob class.
pub const MOB_KIND_PROPERTY: &str = "kind";

/// Builds Remixed Pixel Dungeon level documents from maps.
///
/// # Example
///
/// ```rust
/// use rpd_tiled_core::export::MapExporter;
/// use rpd_tiled_core::model::{MemoryLayer, MemoryMap, MemoryTileset};
///
/// let tileset = MemoryTileset::new("tiles0").into_shared();
/// let map = MemoryMap::new(2, 2)
///     .with_layer(MemoryLayer::new("base", 2, 2).fill(&tileset, &[0, 1, 2, 3]));
///
/// let document = MapExporter::default().export(&map).unwrap();
/// assert_eq!(document.get("tiles").unwrap(), "tiles0_x.png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapExporter {
    config: ExportConfig,
}

impl MapExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Convert `map` into a level document.
    ///
    /// Layers are visited in stored order and dispatched by name; layers with
    /// no [`LayerRole`] are skipped.
    pub fn export(&self, map: &dyn MapView) -> Result<OutputDocument, ExportError> {
        let mut document = OutputDocument::new();

        for layer in map.layers() {
            let layer: &dyn LayerView = &*layer;
            let Some(role) = LayerRole::from_name(layer.name()) else {
                debug!("Skipping layer '{}': no export role", layer.name());
                continue;
            };

            if layer.kind() != LayerKind::Tiles {
                warn!(
                    "Layer '{}' is a {:?} layer, expected tiles",
                    layer.name(),
                    layer.kind()
                );
                return Err(ExportError::NotATileLayer {
                    layer: layer.name().to_string(),
                });
            }

            debug!("Exporting layer '{}' as {:?}", layer.name(), role);
            match role {
                LayerRole::Logic => self.export_logic(layer, &mut document)?,
                LayerRole::Deco => self.export_deco(layer, &mut document)?,
                LayerRole::Mobs => self.export_mobs(layer, &mut document)?,
                LayerRole::Base | LayerRole::Deco2 | LayerRole::RoofBase | LayerRole::RoofDeco => {
                    insert_grid(role, layer, &mut document);
                }
            }
        }

        if !document.contains_key(keys::TILES) {
            document.insert(keys::TILES, self.config.default_tiles.as_str());
        }
        document.insert(keys::WATER, self.config.water.as_str());

        Ok(document)
    }

    fn export_logic(
        &self,
        layer: &dyn LayerView,
        document: &mut OutputDocument,
    ) -> Result<(), ExportError> {
        document.insert(keys::WIDTH, layer.width());
        document.insert(keys::HEIGHT, layer.height());
        insert_grid(LayerRole::Logic, layer, document);

        let tileset = single_tileset(layer)?;
        document.insert(keys::TILES_LOGIC, self.config.image_name(tileset.name()));

        let mut entrance: Vec<u32> = Vec::new();
        let mut multiexit: Vec<Value> = Vec::new();

        // Column by column; entrance and exit arrays follow this order
        for x in 0..layer.width() {
            for y in 0..layer.height() {
                let tile_id = layer.tile_id(x, y);
                if tile_id < 0 {
                    warn!("Hole in logic layer at ({}, {})", x, y);
                    return Err(ExportError::Hole { x, y });
                }

                match classify(tile_id) {
                    TileClass::Entrance => entrance.extend([x, y]),
                    TileClass::Exit => multiexit.push(json!([x, y])),
                    TileClass::Unclassified => {}
                }
            }
        }

        document.insert(keys::ENTRANCE, entrance);
        document.insert(keys::MULTIEXIT, multiexit);
        Ok(())
    }

    fn export_deco(
        &self,
        layer: &dyn LayerView,
        document: &mut OutputDocument,
    ) -> Result<(), ExportError> {
        insert_grid(LayerRole::Deco, layer, document);
        document.insert(keys::CUSTOM_TILES, true);

        let tileset = single_tileset(layer)?;
        document.insert(keys::TILES, self.config.image_name(tileset.name()));

        let tiles = tileset.tiles();
        let names: Vec<String> = tiles
            .iter()
            .map(|tile| tile.text_property(DECO_NAME_PROPERTY))
            .collect();
        let descriptions: Vec<String> = tiles
            .iter()
            .map(|tile| tile.text_property(DECO_DESC_PROPERTY))
            .collect();

        document.insert(keys::DECO_NAME, names);
        document.insert(keys::DECO_DESC, descriptions);
        Ok(())
    }

    fn export_mobs(
        &self,
        layer: &dyn LayerView,
        document: &mut OutputDocument,
    ) -> Result<(), ExportError> {
        let tileset = match self.config.mobs_tileset {
            MobsTilesetPolicy::Strict => single_tileset(layer)?,
            MobsTilesetPolicy::FirstUsed => {
                layer
                    .used_tilesets()
                    .into_iter()
                    .next()
                    .ok_or_else(|| ExportError::NoTileset {
                        layer: layer.name().to_string(),
                    })?
            }
        };

        let mut mobs: Vec<Value> = Vec::new();
        for y in 0..layer.height() {
            for x in 0..layer.width() {
                let tile_id = layer.tile_id(x, y);
                let Ok(local_id) = u32::try_from(tile_id) else {
                    continue;
                };

                let kind = tileset
                    .tile(local_id)
                    .map(|tile| tile.text_property(MOB_KIND_PROPERTY))
                    .unwrap_or_default();
                if kind.is_empty() {
                    warn!("Mob tile {} at ({}, {}) has no kind", tile_id, x, y);
                    return Err(ExportError::MissingMobKind { tile_id });
                }

                mobs.push(json!({ "x": x, "y": y, "kind": kind }));
            }
        }

        document.insert(keys::MOBS, mobs);
        Ok(())
    }
}

fn insert_grid(role: LayerRole, layer: &dyn LayerView, document: &mut OutputDocument) {
    if let Some(key) = role.grid_key() {
        document.insert(key, flatten(layer));
    }
}

/// The one tileset a layer draws from.
fn single_tileset<'a>(
    layer: &'a dyn LayerView,
) -> Result<Box<dyn TilesetView + 'a>, ExportError> {
    let mut tilesets = layer.used_tilesets();
    match tilesets.len() {
        0 => {
            warn!("Layer '{}' uses no tileset", layer.name());
            Err(ExportError::NoTileset {
                layer: layer.name().to_string(),
            })
        }
        1 => Ok(tilesets.remove(0)),
        count => {
            warn!("Layer '{}' uses {} tilesets", layer.name(), count);
            Err(ExportError::MultipleTilesets {
                layer: layer.name().to_string(),
                count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{MemoryCell, MemoryLayer, MemoryMap, MemoryTile, MemoryTileset};

    fn tileset(name: &str) -> Arc<MemoryTileset> {
        MemoryTileset::new(name).into_shared()
    }

    fn logic_map(ids: &[i32]) -> MemoryMap {
        let logic = tileset("logic");
        MemoryMap::new(2, 2).with_layer(MemoryLayer::new("logic", 2, 2).fill(&logic, ids))
    }

    fn mobs_tileset() -> Arc<MemoryTileset> {
        MemoryTileset::new("mobs")
            .with_tile(MemoryTile::new(0).with_property("kind", "Rat"))
            .with_tile(MemoryTile::new(1).with_property("kind", "Gnoll"))
            .with_tile(MemoryTile::new(2).with_property("kind", ""))
            .into_shared()
    }

    #[test]
    fn test_base_only_map() {
        let map = MemoryMap::new(2, 2)
            .with_layer(MemoryLayer::new("base", 2, 2).fill(&tileset("t"), &[0, 1, 2, 3]));

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(document.get("baseTileVar"), Some(&json!([0, 1, 2, 3])));
        assert_eq!(document.get("tiles"), Some(&json!("tiles0_x.png")));
        assert_eq!(document.get("water"), Some(&json!("water0.png")));
        assert!(!document.contains_key("mobs"));
        assert!(!document.contains_key("entrance"));
        assert!(!document.contains_key("width"));
        let keys: Vec<&str> = document.keys().collect();
        assert_eq!(keys, vec!["baseTileVar", "tiles", "water"]);
    }

    #[test]
    fn test_logic_entrance_and_exit() {
        let map = logic_map(&[7, 1, 1, 25]);

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(document.get("width"), Some(&json!(2)));
        assert_eq!(document.get("height"), Some(&json!(2)));
        assert_eq!(document.get("map"), Some(&json!([7, 1, 1, 25])));
        assert_eq!(document.get("tiles_logic"), Some(&json!("logic.png")));
        assert_eq!(document.get("entrance"), Some(&json!([0, 0])));
        assert_eq!(document.get("multiexit"), Some(&json!([[1, 1]])));
        let keys: Vec<&str> = document.keys().collect();
        assert_eq!(
            keys,
            vec![
                "width",
                "height",
                "map",
                "tiles_logic",
                "entrance",
                "multiexit",
                "tiles",
                "water"
            ]
        );
    }

    #[test]
    fn test_logic_all_exit_variants_collected() {
        // 3x2 grid, scanned column by column
        let logic = tileset("logic");
        let map = MemoryMap::new(3, 2).with_layer(
            MemoryLayer::new("logic", 3, 2).fill(&logic, &[8, 1, 26, 25, 7, 1]),
        );

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(document.get("multiexit"), Some(&json!([[0, 0], [0, 1], [2, 0]])));
        assert_eq!(document.get("entrance"), Some(&json!([1, 1])));
    }

    #[test]
    fn test_logic_without_specials_emits_empty_arrays() {
        let document = MapExporter::default().export(&logic_map(&[1, 1, 1, 1])).unwrap();

        assert_eq!(document.get("entrance"), Some(&json!([])));
        assert_eq!(document.get("multiexit"), Some(&json!([])));
    }

    #[test]
    fn test_logic_hole_reports_position() {
        let result = MapExporter::default().export(&logic_map(&[1, 1, -1, 1]));

        assert_eq!(result, Err(ExportError::Hole { x: 0, y: 1 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Hole in logic layer at (0, 1)"
        );
    }

    #[test]
    fn test_empty_logic_layer_has_no_tileset() {
        let map = MemoryMap::new(2, 2).with_layer(MemoryLayer::new("logic", 2, 2));

        let result = MapExporter::default().export(&map);

        assert_eq!(
            result,
            Err(ExportError::NoTileset {
                layer: "logic".to_string()
            })
        );
    }

    #[test]
    fn test_logic_with_two_tilesets_fails() {
        let mut layer = MemoryLayer::new("logic", 2, 2).fill(&tileset("logic"), &[1, 1, 1, 1]);
        layer.set(
            1,
            1,
            Some(MemoryCell {
                tileset: tileset("other"),
                tile_id: 1,
            }),
        );
        let map = MemoryMap::new(2, 2).with_layer(layer);

        let result = MapExporter::default().export(&map);

        assert!(matches!(
            result,
            Err(ExportError::MultipleTilesets { ref layer, count: 2 }) if layer == "logic"
        ));
    }

    #[test]
    fn test_plain_grid_layers() {
        let t = tileset("t");
        let map = MemoryMap::new(1, 2)
            .with_layer(MemoryLayer::new("deco2", 1, 2).fill(&t, &[1, 2]))
            .with_layer(MemoryLayer::new("roof_base", 1, 2).fill(&t, &[3, -1]))
            .with_layer(MemoryLayer::new("roof_deco", 1, 2).fill(&t, &[-1, -1]));

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(document.get("deco2TileVar"), Some(&json!([1, 2])));
        assert_eq!(document.get("roofBaseTileVar"), Some(&json!([3, -1])));
        assert_eq!(document.get("roofDecoTileVar"), Some(&json!([-1, -1])));
    }

    #[test]
    fn test_deco_layer_names_and_descriptions() {
        let deco = MemoryTileset::new("tiles_sewers")
            .with_tile(
                MemoryTile::new(0)
                    .with_property("deco_name", "Statue")
                    .with_property("deco_desc", "A worn statue."),
            )
            .with_tile(MemoryTile::new(1).with_property("deco_name", "Well"))
            .with_tile(MemoryTile::new(2))
            .into_shared();
        let map = MemoryMap::new(2, 1)
            .with_layer(MemoryLayer::new("deco", 2, 1).fill(&deco, &[1, -1]));

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(document.get("decoTileVar"), Some(&json!([1, -1])));
        assert_eq!(document.get("customTiles"), Some(&json!(true)));
        assert_eq!(document.get("tiles"), Some(&json!("tiles_sewers.png")));
        assert_eq!(document.get("decoName"), Some(&json!(["Statue", "Well", ""])));
        assert_eq!(
            document.get("decoDesc"),
            Some(&json!(["A worn statue.", "", ""]))
        );
        let keys: Vec<&str> = document.keys().collect();
        assert_eq!(
            keys,
            vec![
                "decoTileVar",
                "customTiles",
                "tiles",
                "decoName",
                "decoDesc",
                "water"
            ]
        );
    }

    #[test]
    fn test_empty_deco_layer_fails() {
        let map = MemoryMap::new(2, 1).with_layer(MemoryLayer::new("deco", 2, 1));

        let result = MapExporter::default().export(&map);

        assert!(matches!(result, Err(ExportError::NoTileset { .. })));
    }

    #[test]
    fn test_mobs_in_row_major_order() {
        let mobs = mobs_tileset();
        let map = MemoryMap::new(2, 2)
            .with_layer(MemoryLayer::new("mobs", 2, 2).fill(&mobs, &[-1, 1, 0, -1]));

        let document = MapExporter::default().export(&map).unwrap();

        assert_eq!(
            document.get("mobs"),
            Some(&json!([
                { "x": 1, "y": 0, "kind": "Gnoll" },
                { "x": 0, "y": 1, "kind": "Rat" }
            ]))
        );
    }

    #[test]
    fn test_mob_with_empty_kind_fails() {
        let mobs = mobs_tileset();
        let map = MemoryMap::new(2, 1)
            .with_layer(MemoryLayer::new("mobs", 2, 1).fill(&mobs, &[0, 2]));

        let result = MapExporter::default().export(&map);

        assert_eq!(result, Err(ExportError::MissingMobKind { tile_id: 2 }));
        assert!(result.unwrap_err().to_string().ends_with(": 2"));
    }

    #[test]
    fn test_mob_tile_missing_from_tileset_fails() {
        let mobs = mobs_tileset();
        let map = MemoryMap::new(1, 1)
            .with_layer(MemoryLayer::new("mobs", 1, 1).fill(&mobs, &[9]));

        let result = MapExporter::default().export(&map);

        assert_eq!(result, Err(ExportError::MissingMobKind { tile_id: 9 }));
    }

    #[test]
    fn test_mobs_tileset_policy() {
        let mut layer = MemoryLayer::new("mobs", 2, 1).fill(&mobs_tileset(), &[0, -1]);
        layer.set(
            1,
            0,
            Some(MemoryCell {
                tileset: tileset("extra"),
                tile_id: 5,
            }),
        );
        let map = MemoryMap::new(2, 1).with_layer(layer);

        let strict = MapExporter::default().export(&map);
        assert!(matches!(
            strict,
            Err(ExportError::MultipleTilesets { count: 2, .. })
        ));

        // The legacy policy resolves every mob through the first tileset,
        // where tile 5 does not exist
        let lenient = MapExporter::new(ExportConfig {
            mobs_tileset: MobsTilesetPolicy::FirstUsed,
            ..Default::default()
        })
        .export(&map);
        assert_eq!(lenient, Err(ExportError::MissingMobKind { tile_id: 5 }));
    }

    #[test]
    fn test_empty_mobs_layer_fails_under_both_policies() {
        let map = MemoryMap::new(2, 1).with_layer(MemoryLayer::new("mobs", 2, 1));
        let lenient = MapExporter::new(ExportConfig {
            mobs_tileset: MobsTilesetPolicy::FirstUsed,
            ..Default::default()
        });

        assert!(matches!(
            MapExporter::default().export(&map),
            Err(ExportError::NoTileset { .. })
        ));
        assert!(matches!(
            lenient.export(&map),
            Err(ExportError::NoTileset { .. })
        ));
    }

    #[test]
    fn test_unknown_layers_ignored() {
        let map = MemoryMap::new(1, 1)
            .with_layer(MemoryLayer::new("background", 1, 1).fill(&tileset("bg"), &[3]))
            .with_layer(MemoryLayer::without_cells("notes", LayerKind::Objects));

        let document = MapExporter::default().export(&map).unwrap();

        let keys: Vec<&str> = document.keys().collect();
        assert_eq!(keys, vec!["tiles", "water"]);
    }

    #[test]
    fn test_known_non_tile_layer_fails() {
        let map = MemoryMap::new(1, 1)
            .with_layer(MemoryLayer::without_cells("mobs", LayerKind::Objects));

        let result = MapExporter::default().export(&map);

        assert_eq!(
            result,
            Err(ExportError::NotATileLayer {
                layer: "mobs".to_string()
            })
        );
    }

    #[test]
    fn test_custom_config_defaults() {
        let config = ExportConfig {
            default_tiles: "tiles3_x.png".to_string(),
            water: "water3.png".to_string(),
            ..Default::default()
        };

        let document = MapExporter::new(config).export(&MemoryMap::new(1, 1)).unwrap();

        assert_eq!(document.get("tiles"), Some(&json!("tiles3_x.png")));
        assert_eq!(document.get("water"), Some(&json!("water3.png")));
    }

    #[test]
    fn test_export_is_deterministic() {
        let logic = tileset("logic");
        let mobs = mobs_tileset();
        let map = MemoryMap::new(2, 2)
            .with_layer(MemoryLayer::new("logic", 2, 2).fill(&logic, &[7, 4, 4, 8]))
            .with_layer(MemoryLayer::new("mobs", 2, 2).fill(&mobs, &[-1, 0, 1, -1]));
        let exporter = MapExporter::default();

        let first = exporter.export(&map).unwrap().to_pretty_json().unwrap();
        let second = exporter.export(&map).unwrap().to_pretty_json().unwrap();

        assert_eq!(first, second);
    }
}
