//! Terrain tile catalog
//!
//! Every [`TileKind`] maps to a fixed sprite cell in the atlas and to a
//! terrain family. Generation rules test families and eligibility by enum
//! equality.

use serde::{Deserialize, Serialize};

/// Broad terrain family a tile belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainFamily {
    Water,
    Grass,
    Highland,
    Snow,
    Wetland,
    Settlement,
}

/// Terrain tile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileKind {
    GrassPlain,
    GrassForestLight,
    GrassForestDense,
    GrassHills,
    GrassForestHills,
    Mountain,
    Water,
    Ocean,
    GrassVillage,
    GrassTown,
    GrassCity,
    Farm,
    TreeSwamp,
    LightBog,
    Bog,
    Swamp,
    SnowPlain,
    SnowForestLight,
    SnowForestDense,
    SnowHills,
    SnowForestHills,
    SnowWater,
    SnowTown,
    SnowCastle,
}

impl TileKind {
    /// The full catalog in atlas order.
    pub const ALL: [TileKind; 24] = [
        TileKind::GrassPlain,
        TileKind::GrassForestLight,
        TileKind::GrassForestDense,
        TileKind::GrassHills,
        TileKind::GrassForestHills,
        TileKind::Mountain,
        TileKind::Water,
        TileKind::Ocean,
        TileKind::GrassVillage,
        TileKind::GrassTown,
        TileKind::GrassCity,
        TileKind::Farm,
        TileKind::TreeSwamp,
        TileKind::LightBog,
        TileKind::Bog,
        TileKind::Swamp,
        TileKind::SnowPlain,
        TileKind::SnowForestLight,
        TileKind::SnowForestDense,
        TileKind::SnowHills,
        TileKind::SnowForestHills,
        TileKind::SnowWater,
        TileKind::SnowTown,
        TileKind::SnowCastle,
    ];

    /// Sprite location as (row, column) in the atlas.
    pub fn atlas_cell(self) -> (u32, u32) {
        match self {
            TileKind::GrassPlain => (0, 0),
            TileKind::GrassForestLight => (0, 1),
            TileKind::GrassForestDense => (0, 2),
            TileKind::GrassHills => (0, 3),
            TileKind::GrassForestHills => (0, 4),
            TileKind::Mountain => (0, 5),
            TileKind::Water => (0, 6),
            TileKind::Ocean => (0, 7),

            TileKind::GrassVillage => (1, 0),
            TileKind::GrassTown => (1, 1),
            TileKind::GrassCity => (1, 2),
            TileKind::Farm => (1, 3),
            TileKind::TreeSwamp => (1, 4),
            TileKind::LightBog => (1, 5),
            TileKind::Bog => (1, 6),
            TileKind::Swamp => (1, 7),

            TileKind::SnowPlain => (2, 0),
            TileKind::SnowForestLight => (2, 1),
            TileKind::SnowForestDense => (2, 2),
            TileKind::SnowHills => (2, 3),
            TileKind::SnowForestHills => (2, 4),
            TileKind::SnowWater => (2, 5),
            TileKind::SnowTown => (2, 6),
            TileKind::SnowCastle => (2, 7),
        }
    }

    pub fn family(self) -> TerrainFamily {
        match self {
            TileKind::Water | TileKind::Ocean | TileKind::SnowWater => TerrainFamily::Water,

            TileKind::GrassPlain
            | TileKind::GrassForestLight
            | TileKind::GrassForestDense
            | TileKind::GrassHills
            | TileKind::GrassForestHills => TerrainFamily::Grass,

            TileKind::Mountain => TerrainFamily::Highland,

            TileKind::SnowPlain
            | TileKind::SnowForestLight
            | TileKind::SnowForestDense
            | TileKind::SnowHills
            | TileKind::SnowForestHills => TerrainFamily::Snow,

            TileKind::TreeSwamp | TileKind::LightBog | TileKind::Bog | TileKind::Swamp => {
                TerrainFamily::Wetland
            }

            TileKind::GrassVillage
            | TileKind::GrassTown
            | TileKind::GrassCity
            | TileKind::Farm
            | TileKind::SnowTown
            | TileKind::SnowCastle => TerrainFamily::Settlement,
        }
    }

    pub fn is_water(self) -> bool {
        self.family() == TerrainFamily::Water
    }

    /// Lowland grass a settlement can be founded on. Hills are excluded.
    pub fn accepts_settlement(self) -> bool {
        matches!(
            self,
            TileKind::GrassPlain | TileKind::GrassForestLight | TileKind::GrassForestDense
        )
    }

    /// Open grass or light woodland that can turn into marsh.
    pub fn accepts_wetland(self) -> bool {
        matches!(self, TileKind::GrassPlain | TileKind::GrassForestLight)
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::GrassPlain => "Grass Plain",
            TileKind::GrassForestLight => "Light Forest",
            TileKind::GrassForestDense => "Dense Forest",
            TileKind::GrassHills => "Grass Hills",
            TileKind::GrassForestHills => "Forest Hills",
            TileKind::Mountain => "Mountain",
            TileKind::Water => "Water",
            TileKind::Ocean => "Ocean",
            TileKind::GrassVillage => "Village",
            TileKind::GrassTown => "Town",
            TileKind::GrassCity => "City",
            TileKind::Farm => "Farm",
            TileKind::TreeSwamp => "Tree Swamp",
            TileKind::LightBog => "Light Bog",
            TileKind::Bog => "Bog",
            TileKind::Swamp => "Swamp",
            TileKind::SnowPlain => "Snow Plain",
            TileKind::SnowForestLight => "Snow Light Forest",
            TileKind::SnowForestDense => "Snow Dense Forest",
            TileKind::SnowHills => "Snow Hills",
            TileKind::SnowForestHills => "Snow Forest Hills",
            TileKind::SnowWater => "Frozen Water",
            TileKind::SnowTown => "Snow Town",
            TileKind::SnowCastle => "Snow Castle",
        }
    }

    /// Flat preview colour, used where sprites are unavailable.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            TileKind::GrassPlain => (120, 180, 70),
            TileKind::GrassForestLight => (80, 150, 60),
            TileKind::GrassForestDense => (40, 110, 45),
            TileKind::GrassHills => (130, 160, 80),
            TileKind::GrassForestHills => (70, 120, 60),
            TileKind::Mountain => (130, 120, 110),
            TileKind::Water => (60, 110, 190),
            TileKind::Ocean => (25, 55, 120),
            TileKind::GrassVillage => (200, 170, 110),
            TileKind::GrassTown => (190, 140, 90),
            TileKind::GrassCity => (170, 90, 70),
            TileKind::Farm => (210, 200, 100),
            TileKind::TreeSwamp => (70, 100, 70),
            TileKind::LightBog => (110, 130, 90),
            TileKind::Bog => (90, 100, 70),
            TileKind::Swamp => (60, 85, 60),
            TileKind::SnowPlain => (235, 240, 245),
            TileKind::SnowForestLight => (190, 210, 200),
            TileKind::SnowForestDense => (140, 170, 160),
            TileKind::SnowHills => (210, 215, 225),
            TileKind::SnowForestHills => (170, 185, 185),
            TileKind::SnowWater => (170, 200, 230),
            TileKind::SnowTown => (200, 190, 200),
            TileKind::SnowCastle => (160, 150, 170),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_atlas_cells_unique() {
        let cells: HashSet<_> = TileKind::ALL.iter().map(|t| t.atlas_cell()).collect();
        assert_eq!(cells.len(), TileKind::ALL.len());
    }

    #[test]
    fn test_catalog_is_in_atlas_order() {
        let cells: Vec<_> = TileKind::ALL.iter().map(|t| t.atlas_cell()).collect();
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn test_water_family() {
        let water: Vec<_> = TileKind::ALL.iter().copied().filter(|t| t.is_water()).collect();
        assert_eq!(water, vec![TileKind::Water, TileKind::Ocean, TileKind::SnowWater]);
    }

    #[test]
    fn test_eligibility_sets() {
        for tile in TileKind::ALL {
            if tile.accepts_settlement() {
                assert_eq!(tile.family(), TerrainFamily::Grass);
            }
            if tile.accepts_wetland() {
                assert!(tile.accepts_settlement());
            }
        }
        assert!(!TileKind::GrassHills.accepts_settlement());
        assert!(!TileKind::GrassForestDense.accepts_wetland());
    }
}
