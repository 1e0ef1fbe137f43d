//! Sprite rendering of a generated hex map

use std::path::Path;

use image::{imageops, Rgba, RgbaImage};
use tracing::info;

use crate::error::RenderError;
use crate::hexmap::{HexMap, ScreenPoint};
use crate::tileset::{AtlasDescriptor, SpriteRect, Tileset};

/// Canvas fill behind the map.
pub const BACKGROUND: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);

/// Something sprites can be copied onto.
pub trait DrawTarget {
    fn clear(&mut self, color: Rgba<u8>);

    /// Copy `src` from the atlas so its top-left corner lands on `dest`.
    fn blit(&mut self, atlas: &RgbaImage, src: SpriteRect, dest: ScreenPoint);
}

/// An RGBA image whose pixel (0, 0) sits at `origin` in map space, so sprites
/// at negative map coordinates remain visible.
pub struct Canvas {
    image: RgbaImage,
    origin: ScreenPoint,
}

impl Canvas {
    pub fn with_origin(width: u32, height: u32, origin: ScreenPoint) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
            origin,
        }
    }

    /// Canvas just large enough to show every sprite of `map`.
    pub fn fit(map: &HexMap, descriptor: &AtlasDescriptor) -> Self {
        let (min, max) = map.pixel_extent(
            descriptor.sprite_width as f64,
            descriptor.sprite_height as f64,
            descriptor.offset_x,
            descriptor.offset_y,
        );
        let origin = ScreenPoint {
            x: min.x.floor(),
            y: min.y.floor(),
        };
        let width = (max.x - origin.x).ceil().max(1.0) as u32;
        let height = (max.y - origin.y).ceil().max(1.0) as u32;
        Self::with_origin(width, height, origin)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.image.save(path).map_err(|source| RenderError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved {}x{} map image to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Pack pixels as `0RGB` words for a framebuffer window.
    pub fn to_rgb_buffer(&self) -> Vec<u32> {
        self.image
            .pixels()
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect()
    }
}

impl DrawTarget for Canvas {
    fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn blit(&mut self, atlas: &RgbaImage, src: SpriteRect, dest: ScreenPoint) {
        let sprite = imageops::crop_imm(atlas, src.x, src.y, src.width, src.height).to_image();
        let x = (dest.x - self.origin.x).round() as i64;
        let y = (dest.y - self.origin.y).round() as i64;
        imageops::overlay(&mut self.image, &sprite, x, y);
    }
}

/// Clear `target` and draw every populated cell of `map`, in row order so
/// lower rows overlap the ones above. Returns the number of sprites drawn;
/// nothing is drawn until the atlas is ready.
pub fn render_map(map: &HexMap, tileset: &Tileset, target: &mut impl DrawTarget) -> usize {
    target.clear(BACKGROUND);

    let Some(atlas) = tileset.image() else {
        return 0;
    };
    let descriptor = tileset.descriptor();

    let mut drawn = 0;
    for (column, row, tile) in map.populated() {
        let src = descriptor.tile_rect(tile);
        let dest = map.screen_position(row, column, descriptor.offset_x, descriptor.offset_y);
        target.blit(atlas, src, dest);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileKind;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        blits: Vec<(SpriteRect, ScreenPoint)>,
    }

    impl DrawTarget for Recorder {
        fn clear(&mut self, _color: Rgba<u8>) {
            self.clears += 1;
        }

        fn blit(&mut self, _atlas: &RgbaImage, src: SpriteRect, dest: ScreenPoint) {
            self.blits.push((src, dest));
        }
    }

    fn small_descriptor() -> AtlasDescriptor {
        AtlasDescriptor {
            sprite_width: 2,
            sprite_height: 3,
            offset_x: 0.0,
            offset_y: 0.0,
            ..AtlasDescriptor::default()
        }
    }

    fn small_tileset() -> Tileset {
        let mut atlas = RgbaImage::new(16, 9);
        for y in 0..3 {
            for x in 0..2 {
                atlas.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        Tileset::from_image(small_descriptor(), atlas).unwrap()
    }

    #[test]
    fn test_one_blit_per_populated_cell() {
        let mut map = HexMap::new(3, 3, 32.0, 30.0);
        map.set_tile(0, 0, TileKind::Ocean);
        map.set_tile(2, 1, TileKind::SnowHills);

        let desc = AtlasDescriptor::default();
        let tileset = Tileset::from_image(desc.clone(), RgbaImage::new(256, 288)).unwrap();
        let mut target = Recorder::default();

        assert_eq!(render_map(&map, &tileset, &mut target), 2);
        assert_eq!(target.clears, 1);
        assert_eq!(
            target.blits,
            vec![
                (desc.sprite_rect(0, 7), ScreenPoint { x: -16.0, y: -31.0 }),
                (desc.sprite_rect(2, 3), ScreenPoint { x: 32.0, y: -1.0 }),
            ]
        );
    }

    #[test]
    fn test_unready_atlas_draws_nothing() {
        let mut map = HexMap::new(2, 2, 32.0, 30.0);
        map.set_tile(0, 0, TileKind::GrassPlain);
        let tileset = Tileset::unloaded(AtlasDescriptor::default());
        let mut target = Recorder::default();

        assert_eq!(render_map(&map, &tileset, &mut target), 0);
        assert!(target.blits.is_empty());
    }

    #[test]
    fn test_canvas_composites_sprite() {
        let mut map = HexMap::new(1, 1, 4.0, 4.0);
        map.set_tile(0, 0, TileKind::GrassPlain);
        let tileset = small_tileset();

        let mut canvas = Canvas::fit(&map, tileset.descriptor());
        assert_eq!((canvas.width(), canvas.height()), (2, 3));
        render_map(&map, &tileset, &mut canvas);

        for (_, _, pixel) in canvas.image().enumerate_pixels() {
            assert_eq!(*pixel, Rgba([255, 0, 0, 255]));
        }
        assert_eq!(canvas.to_rgb_buffer()[0], 0x00ff0000);
    }

    #[test]
    fn test_transparent_sprite_keeps_background() {
        let mut map = HexMap::new(1, 1, 4.0, 4.0);
        // Mountain sprite is fully transparent in the small atlas
        map.set_tile(0, 0, TileKind::Mountain);
        let tileset = small_tileset();

        let mut canvas = Canvas::fit(&map, tileset.descriptor());
        render_map(&map, &tileset, &mut canvas);
        assert!(canvas.image().pixels().all(|p| *p == BACKGROUND));
    }
}
