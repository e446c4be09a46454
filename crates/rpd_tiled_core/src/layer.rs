//! Layer roles.
//!
//! The level format gives a fixed set of layer names a meaning. Any other
//! layer (backgrounds, notes, object layers...) is left out of the export.

/// Export role of a map layer, chosen by exact layer name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Terrain codes, dimensions, entrances and exits
    Logic,
    /// Ground tile variants
    Base,
    /// Second decoration pass
    Deco2,
    RoofBase,
    RoofDeco,
    /// Decorations with names and descriptions
    Deco,
    /// Mob placement
    Mobs,
}

impl LayerRole {
    pub const ALL: [LayerRole; 7] = [
        LayerRole::Logic,
        LayerRole::Base,
        LayerRole::Deco2,
        LayerRole::RoofBase,
        LayerRole::RoofDeco,
        LayerRole::Deco,
        LayerRole::Mobs,
    ];

    /// Match a layer name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// The layer name this role is bound to.
    pub fn name(self) -> &'static str {
        match self {
            LayerRole::Logic => "logic",
            LayerRole::Base => "base",
            LayerRole::Deco2 => "deco2",
            LayerRole::RoofBase => "roof_base",
            LayerRole::RoofDeco => "roof_deco",
            LayerRole::Deco => "deco",
            LayerRole::Mobs => "mobs",
        }
    }

    /// Document key receiving the flattened grid, if this role exports one.
    pub fn grid_key(self) -> Option<&'static str> {
        match self {
            LayerRole::Logic => Some("map"),
            LayerRole::Base => Some("baseTileVar"),
            LayerRole::Deco2 => Some("deco2TileVar"),
            LayerRole::RoofBase => Some("roofBaseTileVar"),
            LayerRole::RoofDeco => Some("roofDecoTileVar"),
            LayerRole::Deco => Some("decoTileVar"),
            LayerRole::Mobs => None,
        }
    }
}
