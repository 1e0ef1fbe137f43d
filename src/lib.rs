//! Hex map generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod config;
pub mod error;
pub mod generator;
pub mod hexmap;
pub mod noise_field;
pub mod render;
pub mod seeds;
pub mod tilemap;
pub mod tiles;
pub mod tileset;
pub mod viewer;

pub use config::MapConfig;
pub use error::Error;
pub use generator::{GenerationStats, TerrainGenerator};
pub use hexmap::{HexLayout, HexMap, ScreenPoint};
pub use seeds::NoiseSeed;
pub use tiles::{TerrainFamily, TileKind};
pub use tileset::{AtlasDescriptor, SpriteRect, Tileset};
