//! End-to-end export of the TMX/TSX fixtures.

use std::path::PathBuf;

use rpd_tiled_assets::prelude::*;
use rpd_tiled_core::prelude::*;
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_sewers_level_document() {
    let map = TiledLoader::new().load_map(fixture("sewers.tmx")).unwrap();

    let document = MapExporter::default()
        .export(&TiledMapView::new(&map))
        .unwrap();

    let keys: Vec<&str> = document.keys().collect();
    assert_eq!(
        keys,
        vec![
            "baseTileVar",
            "width",
            "height",
            "map",
            "tiles_logic",
            "entrance",
            "multiexit",
            "decoTileVar",
            "customTiles",
            "tiles",
            "decoName",
            "decoDesc",
            "mobs",
            "water",
        ]
    );
    assert_eq!(
        document.into_value(),
        json!({
            "baseTileVar": [0, 0, 0, 0, 0, -1],
            "width": 3,
            "height": 2,
            "map": [7, 1, 1, 1, 8, 1],
            "tiles_logic": "logic.png",
            "entrance": [0, 0],
            "multiexit": [[1, 1]],
            "decoTileVar": [-1, 0, -1, -1, -1, 1],
            "customTiles": true,
            "tiles": "tiles_sewers.png",
            "decoName": ["Barrel", "Bones"],
            "decoDesc": ["Full of ale", ""],
            "mobs": [
                { "x": 2, "y": 0, "kind": "Rat" },
                { "x": 0, "y": 1, "kind": "Gnoll" }
            ],
            "water": "water0.png"
        })
    );
}

#[test]
fn test_layer_views_follow_tiled_data() {
    let map = TiledLoader::new().load_map(fixture("sewers.tmx")).unwrap();
    let view = TiledMapView::new(&map);

    let layers = view.layers();
    let names: Vec<&str> = layers.iter().map(|layer| layer.name()).collect();
    assert_eq!(names, vec!["base", "logic", "deco", "mobs", "triggers"]);
    assert_eq!(layers[4].kind(), LayerKind::Objects);
    assert_eq!(layers[4].tile_id(0, 0), EMPTY_TILE);
    assert!(layers[4].used_tilesets().is_empty());

    let mobs = &layers[3];
    assert_eq!(mobs.tile_id(2, 0), 0);
    assert_eq!(mobs.tile_id(1, 0), EMPTY_TILE);
    assert_eq!(mobs.tile_id(9, 9), EMPTY_TILE);
    let used: Vec<String> = mobs
        .used_tilesets()
        .iter()
        .map(|tileset| tileset.name().to_string())
        .collect();
    assert_eq!(used, vec!["mobs"]);
}

#[test]
fn test_hole_in_logic_layer() {
    let map = TiledLoader::new().load_map(fixture("hole.tmx")).unwrap();

    let error = MapExporter::default()
        .export(&TiledMapView::new(&map))
        .unwrap_err();

    assert_eq!(error, ExportError::Hole { x: 1, y: 0 });
}

#[test]
fn test_object_layer_named_logic() {
    let map = TiledLoader::new()
        .load_map(fixture("object_logic.tmx"))
        .unwrap();

    let error = MapExporter::default()
        .export(&TiledMapView::new(&map))
        .unwrap_err();

    assert_eq!(
        error,
        ExportError::NotATileLayer {
            layer: "logic".to_string()
        }
    );
}

#[test]
fn test_external_tileset_as_tiled_json() {
    let tileset = TiledLoader::new().load_tileset(fixture("mobs.tsx")).unwrap();
    let output_dir = fixture("");

    let document = TilesetExporter::default().export(&TiledTilesetView::new(&tileset), &output_dir);

    assert_eq!(
        document.into_value(),
        json!({
            "name": "mobs",
            "type": "tileset",
            "tilewidth": 16,
            "tileheight": 16,
            "spacing": 0,
            "margin": 0,
            "columns": 2,
            "tilecount": 2,
            "image": "mobs.png",
            "imagewidth": 32,
            "imageheight": 16,
            "properties": [{ "name": "biome", "type": "string", "value": "sewers" }],
            "tiles": [
                {
                    "id": 0,
                    "properties": [{ "name": "kind", "type": "string", "value": "Rat" }]
                },
                {
                    "id": 1,
                    "properties": [
                        { "name": "hp", "type": "int", "value": 12 },
                        { "name": "kind", "type": "string", "value": "Gnoll" }
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_external_tileset_property_dump() {
    let tileset = TiledLoader::new().load_tileset(fixture("mobs.tsx")).unwrap();
    let exporter = TilesetExporter::new(PropertyDumpConverter::default());

    let document = exporter.export(&TiledTilesetView::new(&tileset), &fixture(""));

    assert_eq!(
        document.get("tiles"),
        Some(&json!([
            { "id": 0, "properties": { "kind": "Rat" } },
            { "id": 1, "properties": { "hp": "12", "kind": "Gnoll" } }
        ]))
    );
}
