//! Hex map: tile grid plus the hex-to-pixel coordinate model

use serde::{Deserialize, Serialize};

use crate::tilemap::Tilemap;
use crate::tiles::TileKind;

/// How hexes are staggered on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HexLayout {
    /// Odd columns shift down half a hex; columns are packed at 3/4 width.
    #[default]
    ColumnOffset,
    /// Odd rows shift right half a hex; rows are packed at 3/4 height.
    RowOffset,
}

/// Anchor point of a sprite on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// A `width x height` hex map. Cells start empty and are filled by the
/// generator.
#[derive(Clone, Debug, PartialEq)]
pub struct HexMap {
    pub hex_width: f64,
    pub hex_height: f64,
    pub layout: HexLayout,
    tiles: Tilemap<Option<TileKind>>,
}

impl HexMap {
    pub fn new(map_width: usize, map_height: usize, hex_width: f64, hex_height: f64) -> Self {
        Self::with_layout(map_width, map_height, hex_width, hex_height, HexLayout::default())
    }

    pub fn with_layout(
        map_width: usize,
        map_height: usize,
        hex_width: f64,
        hex_height: f64,
        layout: HexLayout,
    ) -> Self {
        Self {
            hex_width,
            hex_height,
            layout,
            tiles: Tilemap::new(map_width, map_height),
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.width
    }

    pub fn height(&self) -> usize {
        self.tiles.height
    }

    /// Place `tile` at column `x`, row `y`. Coordinates outside the map are
    /// ignored, so callers may write past the edges freely.
    pub fn set_tile(&mut self, x: i64, y: i64, tile: TileKind) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.tiles.set(x, y, Some(tile));
        }
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<TileKind> {
        self.tiles.get(x, y).copied().flatten()
    }

    /// Every cell holding a tile, as `(column, row, tile)`.
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.tiles.iter().filter_map(|(x, y, tile)| tile.map(|t| (x, y, t)))
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|(_, _, tile)| tile.is_some())
    }

    /// Top-left anchor of the hex at `(row, column)`, shifted by a sprite's
    /// registration offset.
    pub fn screen_position(&self, row: usize, column: usize, offset_x: f64, offset_y: f64) -> ScreenPoint {
        let (w, h) = (self.hex_width, self.hex_height);
        let (row_f, col_f) = (row as f64, column as f64);

        match self.layout {
            HexLayout::ColumnOffset => {
                let stagger = if column % 2 == 1 { h / 2.0 } else { 0.0 };
                ScreenPoint {
                    x: col_f * w * 0.75 - w / 2.0 + offset_x,
                    y: row_f * h + stagger - h / 2.0 + offset_y,
                }
            }
            HexLayout::RowOffset => {
                let stagger = if row % 2 == 1 { w / 2.0 } else { 0.0 };
                ScreenPoint {
                    x: col_f * w + stagger - w / 2.0 + offset_x,
                    y: row_f * h * 0.75 - h / 2.0 + offset_y,
                }
            }
        }
    }

    /// Pixel bounds `(min, max)` covered by sprites of the given size drawn at
    /// every cell.
    pub fn pixel_extent(
        &self,
        sprite_width: f64,
        sprite_height: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> (ScreenPoint, ScreenPoint) {
        if self.width() == 0 || self.height() == 0 {
            return (ScreenPoint { x: 0.0, y: 0.0 }, ScreenPoint { x: 0.0, y: 0.0 });
        }
        let mut min = ScreenPoint { x: f64::MAX, y: f64::MAX };
        let mut max = ScreenPoint { x: f64::MIN, y: f64::MIN };

        // Extremes always lie on the first or last two rows and columns
        let last_row = self.height() - 1;
        let last_col = self.width() - 1;
        let rows = [0, 1.min(last_row), last_row.saturating_sub(1), last_row];
        let cols = [0, 1.min(last_col), last_col.saturating_sub(1), last_col];
        for &row in &rows {
            for &col in &cols {
                let p = self.screen_position(row, col, offset_x, offset_y);
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x + sprite_width);
                max.y = max.y.max(p.y + sprite_height);
            }
        }
        (min, max)
    }
}
