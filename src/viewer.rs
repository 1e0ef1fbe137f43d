use minifb::{Key, KeyRepeat, Window, WindowOptions};
use tracing::{info, warn};

use crate::config::MapConfig;
use crate::error::{ConfigError, Error, ViewerError};
use crate::hexmap::HexMap;
use crate::render::{render_map, Canvas};
use crate::seeds::NoiseSeed;
use crate::tileset::Tileset;

/// Open a window and redraw the map every frame.
/// Press R to regenerate with a new random seed, Escape to exit.
pub fn run_viewer(config: &MapConfig, tileset: &Tileset, map: HexMap) -> Result<(), Error> {
    let mut map = map;
    let mut canvas = Canvas::fit(&map, tileset.descriptor());
    let (width, height) = (canvas.width() as usize, canvas.height() as usize);

    let mut window = Window::new(
        "Hex Map - R: Regenerate, Esc: Exit",
        width,
        height,
        WindowOptions {
            resize: false,
            scale: minifb::Scale::X1,
            ..WindowOptions::default()
        },
    )
    .map_err(ViewerError::from)?;

    window.set_target_fps(60);

    if !tileset.is_ready() {
        warn!("atlas image is not loaded; tiles will not be drawn");
    }

    info!("viewer started ({}x{}). R: regenerate, Esc: exit", width, height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            let seed = NoiseSeed::random();
            info!("regenerating with seed {}", seed);
            map = regenerate(config, seed)?;
        }

        render_map(&map, tileset, &mut canvas);
        window
            .update_with_buffer(&canvas.to_rgb_buffer(), width, height)
            .map_err(ViewerError::from)?;
    }

    Ok(())
}

fn regenerate(config: &MapConfig, seed: NoiseSeed) -> Result<HexMap, ConfigError> {
    config.generate(seed).map(|(map, _)| map)
}
