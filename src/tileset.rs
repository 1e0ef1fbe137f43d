//! Sprite atlas for hex tiles

use std::path::PathBuf;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AtlasError, ConfigError};
use crate::tiles::TileKind;

/// Layout of a sprite sheet: cell size, grid size and the registration
/// offset applied when a sprite is drawn at a hex position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasDescriptor {
    pub image_path: PathBuf,
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub rows: u32,
    pub columns: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for AtlasDescriptor {
    /// The 32x48 fantasy hex sheet. Sprites are taller than the hex and
    /// extend 16px upward.
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("img/fantasyhextiles_v3.png"),
            sprite_width: 32,
            sprite_height: 48,
            rows: 6,
            columns: 8,
            offset_x: 0.0,
            offset_y: -16.0,
        }
    }
}

impl AtlasDescriptor {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sprite_width == 0 || self.sprite_height == 0 {
            return Err(ConfigError::InvalidSpriteSize {
                width: self.sprite_width,
                height: self.sprite_height,
            });
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ConfigError::InvalidSpriteOffset {
                x: self.offset_x,
                y: self.offset_y,
            });
        }
        self.catalog_extent().map(|_| ())
    }

    /// Smallest image size that holds every catalog sprite.
    pub fn catalog_extent(&self) -> Result<(u32, u32), ConfigError> {
        let too_large = || ConfigError::SpriteSheetTooLarge {
            width: self.sprite_width,
            height: self.sprite_height,
        };
        TileKind::ALL.iter().try_fold((0, 0), |(w, h), tile| {
            let (row, column) = tile.atlas_cell();
            let right = (column + 1).checked_mul(self.sprite_width).ok_or_else(too_large)?;
            let bottom = (row + 1).checked_mul(self.sprite_height).ok_or_else(too_large)?;
            Ok((w.max(right), h.max(bottom)))
        })
    }

    /// Source rectangle of the sprite at `(row, column)`.
    pub fn sprite_rect(&self, row: u32, column: u32) -> SpriteRect {
        SpriteRect {
            x: column * self.sprite_width,
            y: row * self.sprite_height,
            width: self.sprite_width,
            height: self.sprite_height,
        }
    }

    pub fn tile_rect(&self, tile: TileKind) -> SpriteRect {
        let (row, column) = tile.atlas_cell();
        self.sprite_rect(row, column)
    }
}

/// Pixel rectangle inside the atlas image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Atlas descriptor plus its decoded image, once available.
pub struct Tileset {
    descriptor: AtlasDescriptor,
    image: Option<RgbaImage>,
}

impl Tileset {
    /// A tileset whose image has not been decoded. Nothing is drawn from it.
    pub fn unloaded(descriptor: AtlasDescriptor) -> Self {
        Self { descriptor, image: None }
    }

    /// Decode the image named by the descriptor.
    pub fn load(descriptor: AtlasDescriptor) -> Result<Self, AtlasError> {
        let path = descriptor.image_path.clone();
        let img = image::open(&path).map_err(|source| AtlasError::Load {
            path: path.clone(),
            source,
        })?;
        let tileset = Self::from_image(descriptor, img.to_rgba8())?;
        info!("loaded atlas {} ({}x{})", path.display(), img.width(), img.height());
        Ok(tileset)
    }

    /// Wrap an already decoded image. The descriptor must be valid and the
    /// image must cover every sprite cell the catalog can reference.
    pub fn from_image(descriptor: AtlasDescriptor, image: RgbaImage) -> Result<Self, AtlasError> {
        descriptor.validate()?;
        let (needed_width, needed_height) = descriptor.catalog_extent()?;
        if image.width() < needed_width || image.height() < needed_height {
            return Err(AtlasError::TooSmall {
                actual_width: image.width(),
                actual_height: image.height(),
                needed_width,
                needed_height,
            });
        }
        Ok(Self {
            descriptor,
            image: Some(image),
        })
    }

    pub fn descriptor(&self) -> &AtlasDescriptor {
        &self.descriptor
    }

    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }
}
