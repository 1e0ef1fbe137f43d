use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hexmap_generator::ascii;
use hexmap_generator::render::{render_map, Canvas};
use hexmap_generator::viewer::run_viewer;
use hexmap_generator::{Error, HexLayout, MapConfig, Tileset};

#[derive(Parser, Debug)]
#[command(name = "hexmap_generator")]
#[command(about = "Generate procedural hex terrain maps")]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of hex columns
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Number of hex rows
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Pixel width of one hex
    #[arg(long)]
    hex_width: Option<f64>,

    /// Pixel height of one hex
    #[arg(long)]
    hex_height: Option<f64>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hex packing
    #[arg(long, value_enum)]
    layout: Option<HexLayout>,

    /// Atlas image path
    #[arg(long)]
    atlas: Option<PathBuf>,

    /// Render the map to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the map as ASCII
    #[arg(long)]
    ascii: bool,

    /// Use ANSI colours for ASCII output
    #[arg(long)]
    color: bool,

    /// Open an interactive window
    #[arg(long)]
    view: bool,
}

impl Args {
    fn into_config(self) -> Result<(MapConfig, Options), Error> {
        let mut config = match &self.config {
            Some(path) => MapConfig::load(path)?,
            None => MapConfig::default(),
        };

        if let Some(width) = self.width {
            config.map_width = width;
        }
        if let Some(height) = self.height {
            config.map_height = height;
        }
        if let Some(hex_width) = self.hex_width {
            config.hex_width = hex_width;
        }
        if let Some(hex_height) = self.hex_height {
            config.hex_height = hex_height;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(atlas) = self.atlas {
            config.atlas.image_path = atlas;
        }

        let options = Options {
            output: self.output,
            ascii: self.ascii,
            color: self.color,
            view: self.view,
        };
        Ok((config, options))
    }
}

struct Options {
    output: Option<PathBuf>,
    ascii: bool,
    color: bool,
    view: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let (config, options) = args.into_config()?;

    let seed = config.noise_seed();
    info!("generating {}x{} hex map with seed {}", config.map_width, config.map_height, seed);
    let (map, _stats) = config.generate(seed)?;

    if options.ascii || options.color {
        if options.color {
            print!("{}", ascii::render_colored_ascii_map(&map));
        } else {
            print!("{}", ascii::render_ascii_map(&map));
        }
        print!("{}", ascii::format_tile_stats(&map));
    }

    if options.output.is_none() && !options.view {
        return Ok(());
    }

    // A missing atlas is not fatal: the map is still drawn, just without sprites
    let tileset = match Tileset::load(config.atlas.clone()) {
        Ok(tileset) => tileset,
        Err(e) => {
            warn!("{}; tiles will not be drawn", e);
            Tileset::unloaded(config.atlas.clone())
        }
    };

    if let Some(path) = &options.output {
        let mut canvas = Canvas::fit(&map, tileset.descriptor());
        let drawn = render_map(&map, &tileset, &mut canvas);
        info!("drew {} tiles", drawn);
        canvas.save(path)?;
    }

    if options.view {
        run_viewer(&config, &tileset, map)?;
    }

    Ok(())
}
