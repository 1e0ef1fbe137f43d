//! ASCII rendering of hex maps
//!
//! One character per cell, one line per row. Handy for quick inspection of
//! a seed without an atlas image.

use crate::hexmap::HexMap;
use crate::tiles::TileKind;

/// Character used for a tile in text output.
pub fn tile_char(tile: TileKind) -> char {
    match tile {
        TileKind::Ocean => '~',
        TileKind::Water => '-',
        TileKind::SnowWater => '=',
        TileKind::GrassPlain => '.',
        TileKind::GrassForestLight => 't',
        TileKind::GrassForestDense => 'T',
        TileKind::GrassHills => 'n',
        TileKind::GrassForestHills => 'N',
        TileKind::Mountain => '^',
        TileKind::GrassVillage => 'v',
        TileKind::GrassTown => 'o',
        TileKind::GrassCity => 'C',
        TileKind::Farm => 'f',
        TileKind::TreeSwamp => 'S',
        TileKind::LightBog => ',',
        TileKind::Bog => ';',
        TileKind::Swamp => '&',
        TileKind::SnowPlain => '*',
        TileKind::SnowForestLight => 'y',
        TileKind::SnowForestDense => 'Y',
        TileKind::SnowHills => 'A',
        TileKind::SnowForestHills => 'M',
        TileKind::SnowTown => 'O',
        TileKind::SnowCastle => 'K',
    }
}

/// Render the map as text. Empty cells are blanks.
pub fn render_ascii_map(map: &HexMap) -> String {
    let mut result = String::with_capacity((map.width() + 1) * map.height());
    for y in 0..map.height() {
        for x in 0..map.width() {
            result.push(map.tile(x, y).map_or(' ', tile_char));
        }
        result.push('\n');
    }
    result
}

/// Render the map with 24-bit ANSI colours.
pub fn render_colored_ascii_map(map: &HexMap) -> String {
    let mut result = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            match map.tile(x, y) {
                Some(tile) => {
                    let bg = tile.color();
                    result.push_str(&ansi_colored_char(tile_char(tile), fg_color(bg), bg));
                }
                None => result.push(' '),
            }
        }
        result.push('\n');
    }
    result
}

/// Darken light backgrounds and brighten dark ones so the glyph stays legible.
fn fg_color((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luminance > 128.0 {
        (r.saturating_sub(90), g.saturating_sub(90), b.saturating_sub(90))
    } else {
        (r.saturating_add(90), g.saturating_add(90), b.saturating_add(90))
    }
}

/// Format a single character with ANSI true color foreground and background.
pub fn ansi_colored_char(ch: char, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.0, fg.1, fg.2,
        bg.0, bg.1, bg.2,
        ch
    )
}

/// Legend of every tile glyph, in catalog order.
pub fn tile_legend() -> String {
    let mut legend = String::from("=== TILE LEGEND ===\n");
    for chunk in TileKind::ALL.chunks(4) {
        for tile in chunk {
            legend.push_str(&format!("  {} {:<18}", tile_char(*tile), tile.name()));
        }
        legend.push('\n');
    }
    legend
}

/// Count of each tile kind present, in catalog order.
pub fn calculate_tile_stats(map: &HexMap) -> Vec<(TileKind, usize)> {
    let mut counts = [0usize; TileKind::ALL.len()];
    for (_, _, tile) in map.populated() {
        if let Some(idx) = TileKind::ALL.iter().position(|t| *t == tile) {
            counts[idx] += 1;
        }
    }
    TileKind::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(tile, count)| (*tile, count))
        .collect()
}

/// Human readable summary of [`calculate_tile_stats`].
pub fn format_tile_stats(map: &HexMap) -> String {
    let total = (map.width() * map.height()).max(1);
    let mut out = String::from("=== TILE STATS ===\n");
    for (tile, count) in calculate_tile_stats(map) {
        out.push_str(&format!(
            "  {} {:<18} {:>6} ({:.1}%)\n",
            tile_char(tile),
            tile.name(),
            count,
            100.0 * count as f64 / total as f64
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glyphs_are_unique() {
        let glyphs: HashSet<_> = TileKind::ALL.iter().map(|t| tile_char(*t)).collect();
        assert_eq!(glyphs.len(), TileKind::ALL.len());
        assert!(!glyphs.contains(&' '));
    }

    #[test]
    fn test_render_ascii_map() {
        let mut map = HexMap::new(3, 2, 32.0, 30.0);
        map.set_tile(0, 0, TileKind::Ocean);
        map.set_tile(1, 0, TileKind::Mountain);
        map.set_tile(2, 1, TileKind::GrassCity);

        assert_eq!(render_ascii_map(&map), "~^ \n  C\n");
    }

    #[test]
    fn test_tile_stats() {
        let mut map = HexMap::new(2, 2, 32.0, 30.0);
        map.set_tile(0, 0, TileKind::Water);
        map.set_tile(1, 0, TileKind::Water);
        map.set_tile(0, 1, TileKind::GrassPlain);

        assert_eq!(
            calculate_tile_stats(&map),
            vec![(TileKind::GrassPlain, 1), (TileKind::Water, 2)]
        );
        assert!(format_tile_stats(&map).contains("Water"));
    }

    #[test]
    fn test_legend_lists_every_tile() {
        let legend = tile_legend();
        for tile in TileKind::ALL {
            assert!(legend.contains(tile.name()));
        }
    }

    #[test]
    fn test_colored_map_contains_glyphs() {
        let mut map = HexMap::new(1, 1, 32.0, 30.0);
        map.set_tile(0, 0, TileKind::Swamp);
        let out = render_colored_ascii_map(&map);
        assert!(out.contains('&'));
        assert!(out.starts_with("\x1b[38;2;"));
    }
}
