//! Debug script to dump a generated map as ASCII, one file per pass

use std::fs::File;
use std::io::{self, Write};

use hexmap_generator::ascii::{format_tile_stats, render_ascii_map, tile_legend};
use hexmap_generator::{HexMap, NoiseSeed, TerrainGenerator};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().init();

    let width = 64;
    let height = 48;
    let master = 12345u64;

    let generator = TerrainGenerator::new(NoiseSeed::from_master(master));
    let mut map = HexMap::new(width, height, 32.0, 30.0);

    let mut file = File::create("tile_debug.txt")?;
    writeln!(file, "=== HEX MAP DEBUG ({}x{}) seed={} ({}) ===", width, height, master, generator.seed())?;
    writeln!(file)?;
    write!(file, "{}", tile_legend())?;

    let terrain = generator.terrain_pass(&mut map);
    write_stage(&mut file, "TERRAIN", terrain, &map)?;

    let settlements = generator.settlement_pass(&mut map);
    write_stage(&mut file, "SETTLEMENTS", settlements, &map)?;

    let rivers = generator.river_pass(&mut map);
    write_stage(&mut file, "RIVERS", rivers, &map)?;

    let wetlands = generator.wetland_pass(&mut map);
    write_stage(&mut file, "WETLANDS", wetlands, &map)?;

    write!(file, "{}", format_tile_stats(&map))?;
    println!("Wrote tile_debug.txt");
    Ok(())
}

fn write_stage(file: &mut File, name: &str, written: usize, map: &HexMap) -> io::Result<()> {
    writeln!(file)?;
    writeln!(file, "--- after {} pass ({} cells written) ---", name, written)?;
    write!(file, "{}", render_ascii_map(map))
}
