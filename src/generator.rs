//! Procedural terrain generation
//!
//! The map is filled by four passes that run in order, each reading the grid
//! as the previous passes left it:
//!
//! 1. base terrain from a low-frequency fbm field, with a snow band in the
//!    northern fifth of the map
//! 2. settlements scattered on lowland grass and forest
//! 3. rivers carved along a narrow band of a second noise field
//! 4. bogs and swamps where low ground meets a wetness field
//!
//! Every decision is local to its cell; neighbours only matter through the
//! continuity of the noise.

use tracing::{debug, info};

use crate::hexmap::HexMap;
use crate::noise_field::LatticeNoise;
use crate::seeds::NoiseSeed;
use crate::tiles::TileKind;

/// Cells per noise lattice unit for the elevation field.
pub const TERRAIN_SCALE: f64 = 50.0;
pub const TERRAIN_OCTAVES: u32 = 4;
/// The forest field runs at three times the terrain frequency.
pub const FOREST_FREQUENCY: f64 = 3.0;
pub const FOREST_OCTAVES: u32 = 2;

pub const OCEAN_MAX: f64 = 0.15;
pub const WATER_MAX: f64 = 0.3;
pub const MOUNTAIN_MAX: f64 = 0.45;
pub const FOREST_MAX: f64 = 0.55;
pub const DENSE_FOREST_MAX: f64 = 0.3;
pub const LIGHT_FOREST_MAX: f64 = 0.6;

/// Fraction of the map height (from the top) that gets snow.
pub const SNOW_LATITUDE: f64 = 0.2;

pub const SETTLEMENT_DENSITY: f64 = 0.015;
pub const VILLAGE_MAX: f64 = 0.5;
pub const TOWN_MAX: f64 = 0.8;

pub const RIVER_SCALE: f64 = 30.0;
pub const RIVER_OCTAVES: u32 = 3;
pub const RIVER_BAND: (f64, f64) = (0.65, 0.75);

pub const WETLAND_SCALE: f64 = 25.0;
pub const WETLAND_OCTAVES: u32 = 2;
pub const WETLAND_ELEVATION_BAND: (f64, f64) = (0.28, 0.42);
pub const WETLAND_THRESHOLD: f64 = 0.6;
pub const BOG_MAX: f64 = 0.4;
pub const LIGHT_BOG_MAX: f64 = 0.7;

/// Lattice multipliers that decorrelate the per-cell rolls.
const SETTLEMENT_ROLL: (f64, f64) = (7.0, 11.0);
const SETTLEMENT_KIND_ROLL: (f64, f64) = (13.0, 17.0);
const WETLAND_KIND_ROLL: (f64, f64) = (19.0, 23.0);

/// Cells written by each pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub terrain: usize,
    pub settlements: usize,
    pub rivers: usize,
    pub wetlands: usize,
}

/// Fills a [`HexMap`] from a single noise seed.
#[derive(Clone, Copy, Debug)]
pub struct TerrainGenerator {
    noise: LatticeNoise,
}

impl TerrainGenerator {
    pub fn new(seed: NoiseSeed) -> Self {
        Self {
            noise: LatticeNoise::new(seed),
        }
    }

    pub fn seed(&self) -> NoiseSeed {
        self.noise.seed()
    }

    /// Run all four passes. Afterwards every cell holds a tile.
    pub fn generate(&self, map: &mut HexMap) -> GenerationStats {
        let stats = GenerationStats {
            terrain: self.terrain_pass(map),
            settlements: self.settlement_pass(map),
            rivers: self.river_pass(map),
            wetlands: self.wetland_pass(map),
        };
        info!(
            "generated {}x{} map with seed {}: {} settlements, {} river cells, {} wetland cells",
            map.width(),
            map.height(),
            self.seed(),
            stats.settlements,
            stats.rivers,
            stats.wetlands
        );
        stats
    }

    /// Elevation-like field shared by the terrain and wetland passes.
    fn terrain_value(&self, x: usize, y: usize) -> f64 {
        self.noise.fbm(
            x as f64 / TERRAIN_SCALE,
            y as f64 / TERRAIN_SCALE,
            TERRAIN_OCTAVES,
        )
    }

    fn forest_value(&self, x: usize, y: usize) -> f64 {
        self.noise.fbm(
            x as f64 / TERRAIN_SCALE * FOREST_FREQUENCY,
            y as f64 / TERRAIN_SCALE * FOREST_FREQUENCY,
            FOREST_OCTAVES,
        )
    }

    fn roll(&self, x: usize, y: usize, (mx, my): (f64, f64)) -> f64 {
        self.noise.hash(x as f64 * mx, y as f64 * my)
    }

    /// Pass 1: classify every cell from the elevation field.
    pub fn terrain_pass(&self, map: &mut HexMap) -> usize {
        let (width, height) = (map.width(), map.height());
        let snow_rows = height as f64 * SNOW_LATITUDE;

        for y in 0..height {
            let northern = (y as f64) < snow_rows;
            for x in 0..width {
                let terrain = self.terrain_value(x, y);
                let tile = classify_terrain(terrain, northern, || self.forest_value(x, y));
                map.set_tile(x as i64, y as i64, tile);
            }
        }

        let written = width * height;
        debug!("terrain pass wrote {} cells", written);
        written
    }

    /// Pass 2: found villages, towns and cities on lowland grass.
    pub fn settlement_pass(&self, map: &mut HexMap) -> usize {
        let mut placed = 0;

        for y in 0..map.height() {
            for x in 0..map.width() {
                let eligible = map.tile(x, y).is_some_and(TileKind::accepts_settlement);
                if !eligible || self.roll(x, y, SETTLEMENT_ROLL) >= SETTLEMENT_DENSITY {
                    continue;
                }
                let tile = classify_settlement(self.roll(x, y, SETTLEMENT_KIND_ROLL));
                map.set_tile(x as i64, y as i64, tile);
                placed += 1;
            }
        }

        debug!("settlement pass placed {} settlements", placed);
        placed
    }

    /// Pass 3: carve rivers through dry land. The outer ring of cells is left
    /// alone, as is any existing body of water.
    pub fn river_pass(&self, map: &mut HexMap) -> usize {
        let mut carved = 0;
        let (lo, hi) = RIVER_BAND;

        for y in 1..map.height().saturating_sub(1) {
            for x in 1..map.width().saturating_sub(1) {
                let water = self.noise.fbm(
                    x as f64 / RIVER_SCALE,
                    y as f64 / RIVER_SCALE,
                    RIVER_OCTAVES,
                );
                if water <= lo || water >= hi {
                    continue;
                }
                if map.tile(x, y).is_some_and(TileKind::is_water) {
                    continue;
                }
                map.set_tile(x as i64, y as i64, TileKind::Water);
                carved += 1;
            }
        }

        debug!("river pass carved {} cells", carved);
        carved
    }

    /// Pass 4: turn low, wet grassland into bog and swamp.
    pub fn wetland_pass(&self, map: &mut HexMap) -> usize {
        let mut converted = 0;
        let (elev_lo, elev_hi) = WETLAND_ELEVATION_BAND;

        for y in 0..map.height() {
            for x in 0..map.width() {
                let terrain = self.terrain_value(x, y);
                let wetness = self.noise.fbm(
                    x as f64 / WETLAND_SCALE,
                    y as f64 / WETLAND_SCALE,
                    WETLAND_OCTAVES,
                );
                if terrain <= elev_lo || terrain >= elev_hi || wetness <= WETLAND_THRESHOLD {
                    continue;
                }
                if !map.tile(x, y).is_some_and(TileKind::accepts_wetland) {
                    continue;
                }
                let tile = classify_wetland(self.roll(x, y, WETLAND_KIND_ROLL));
                map.set_tile(x as i64, y as i64, tile);
                converted += 1;
            }
        }

        debug!("wetland pass converted {} cells", converted);
        converted
    }
}

/// Base tile for an elevation value. `forest_variant` is only evaluated for
/// the forest band.
pub fn classify_terrain(terrain: f64, northern: bool, forest_variant: impl FnOnce() -> f64) -> TileKind {
    if northern && terrain > WATER_MAX {
        return if terrain < MOUNTAIN_MAX {
            TileKind::SnowHills
        } else if terrain < FOREST_MAX {
            woodland(
                forest_variant(),
                TileKind::SnowForestDense,
                TileKind::SnowForestLight,
                TileKind::SnowPlain,
            )
        } else {
            TileKind::SnowPlain
        };
    }

    if terrain < OCEAN_MAX {
        TileKind::Ocean
    } else if terrain < WATER_MAX {
        TileKind::Water
    } else if terrain < MOUNTAIN_MAX {
        TileKind::Mountain
    } else if terrain < FOREST_MAX {
        woodland(
            forest_variant(),
            TileKind::GrassForestDense,
            TileKind::GrassForestLight,
            TileKind::GrassPlain,
        )
    } else {
        TileKind::GrassPlain
    }
}

fn woodland(variant: f64, dense: TileKind, light: TileKind, open: TileKind) -> TileKind {
    if variant < DENSE_FOREST_MAX {
        dense
    } else if variant < LIGHT_FOREST_MAX {
        light
    } else {
        open
    }
}

pub fn classify_settlement(roll: f64) -> TileKind {
    if roll < VILLAGE_MAX {
        TileKind::GrassVillage
    } else if roll < TOWN_MAX {
        TileKind::GrassTown
    } else {
        TileKind::GrassCity
    }
}

pub fn classify_wetland(roll: f64) -> TileKind {
    if roll < BOG_MAX {
        TileKind::Bog
    } else if roll < LIGHT_BOG_MAX {
        TileKind::LightBog
    } else {
        TileKind::Swamp
    }
}
