//! Special tile codes of the `logic` layer.
//!
//! Logic tiles use the game's terrain numbering. A few codes mark level
//! connections; everything else is ordinary terrain.

use crate::view::TileId;

/// Logic tiles with a special meaning on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SpecialTile {
    Entrance = 7,
    Exit = 8,
    LockedExit = 25,
    UnlockedExit = 26,
}

impl SpecialTile {
    pub const ALL: [SpecialTile; 4] = [
        SpecialTile::Entrance,
        SpecialTile::Exit,
        SpecialTile::LockedExit,
        SpecialTile::UnlockedExit,
    ];

    pub fn from_id(id: TileId) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.id() == id)
    }

    pub fn id(self) -> TileId {
        self as TileId
    }

    /// Exit variants all collapse to [`TileClass::Exit`].
    pub fn class(self) -> TileClass {
        match self {
            SpecialTile::Entrance => TileClass::Entrance,
            SpecialTile::Exit | SpecialTile::LockedExit | SpecialTile::UnlockedExit => {
                TileClass::Exit
            }
        }
    }
}

/// Export role of a logic tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Where the hero arrives
    Entrance,
    /// Any level exit, locked or not
    Exit,
    /// Plain terrain
    Unclassified,
}

/// Classify a non-negative logic tile ID.
///
/// Negative IDs are holes and must be rejected before classification.
pub fn classify(id: TileId) -> TileClass {
    SpecialTile::from_id(id).map_or(TileClass::Unclassified, SpecialTile::class)
}
