//! Construction parameters for a hex map.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::generator::{GenerationStats, TerrainGenerator};
use crate::hexmap::{HexLayout, HexMap};
use crate::seeds::NoiseSeed;
use crate::tileset::AtlasDescriptor;

/// Map size, hex footprint, seed and atlas layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Number of hex columns.
    pub map_width: usize,
    /// Number of hex rows.
    pub map_height: usize,
    /// Pixel width of one hex.
    pub hex_width: f64,
    /// Pixel height of one hex.
    pub hex_height: f64,
    /// Master seed. A fresh random seed is drawn when absent, so such runs
    /// cannot be reproduced.
    pub seed: Option<u64>,
    pub layout: HexLayout,
    pub atlas: AtlasDescriptor,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_width: 64,
            map_height: 48,
            hex_width: 32.0,
            hex_height: 30.0,
            seed: None,
            layout: HexLayout::ColumnOffset,
            atlas: AtlasDescriptor::default(),
        }
    }
}

impl MapConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject parameters that would produce an empty or garbage map.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.map_width,
                height: self.map_height,
            });
        }
        let valid_hex = |v: f64| v.is_finite() && v > 0.0;
        if !valid_hex(self.hex_width) || !valid_hex(self.hex_height) {
            return Err(ConfigError::InvalidHexSize {
                width: self.hex_width,
                height: self.hex_height,
            });
        }
        self.atlas.validate()
    }

    /// The configured seed, or a random one.
    pub fn noise_seed(&self) -> NoiseSeed {
        match self.seed {
            Some(master) => NoiseSeed::from_master(master),
            None => NoiseSeed::random(),
        }
    }

    /// An empty map with the configured dimensions.
    pub fn empty_map(&self) -> HexMap {
        HexMap::with_layout(
            self.map_width,
            self.map_height,
            self.hex_width,
            self.hex_height,
            self.layout,
        )
    }

    /// Validate, then build and fill a map with the given seed.
    pub fn generate(&self, seed: NoiseSeed) -> Result<(HexMap, GenerationStats), ConfigError> {
        self.validate()?;
        let mut map = self.empty_map();
        let stats = TerrainGenerator::new(seed).generate(&mut map);
        Ok((map, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = MapConfig { map_width: 0, ..MapConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 48 })
        ));
    }

    #[test]
    fn test_rejects_bad_hex_size() {
        for (w, h) in [(0.0, 30.0), (-1.0, 30.0), (32.0, f64::NAN), (f64::INFINITY, 30.0)] {
            let config = MapConfig { hex_width: w, hex_height: h, ..MapConfig::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidHexSize { .. })));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MapConfig::from_json(
            r#"{ "map_width": 10, "seed": 99, "layout": "row_offset", "atlas": { "offset_y": -8.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.map_width, 10);
        assert_eq!(config.map_height, 48);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.layout, HexLayout::RowOffset);
        assert_eq!(config.atlas.offset_y, -8.0);
        assert_eq!(config.atlas.sprite_height, 48);
    }

    #[test]
    fn test_oversized_sprite_json_is_rejected() {
        let config = MapConfig::from_json(r#"{ "atlas": { "sprite_width": 1073741824 } }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::SpriteSheetTooLarge { .. })));
        assert!(config.generate(NoiseSeed::new(1.0).unwrap()).is_err());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(MapConfig::from_json("{ map_width: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            MapConfig::load("no/such/config.json"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_generate_with_fixed_seed() {
        let config = MapConfig { map_width: 8, map_height: 6, seed: Some(3), ..MapConfig::default() };
        let (a, _) = config.generate(config.noise_seed()).unwrap();
        let (b, _) = config.generate(config.noise_seed()).unwrap();
        assert_eq!(a, b);
        assert!(a.is_complete());
    }

    #[test]
    fn test_generate_validates_first() {
        let config = MapConfig { map_height: 0, ..MapConfig::default() };
        assert!(config.generate(NoiseSeed::from_master(1)).is_err());
    }
}
