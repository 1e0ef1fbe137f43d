//! Error types for configuration, atlas loading, rendering and the viewer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("hex size must be finite and positive, got {width}x{height}")]
    InvalidHexSize { width: f64, height: f64 },

    #[error("sprite size must be non-zero, got {width}x{height}")]
    InvalidSpriteSize { width: u32, height: u32 },

    #[error("sprite size {width}x{height} makes the atlas larger than u32 pixels")]
    SpriteSheetTooLarge { width: u32, height: u32 },

    #[error("sprite offset must be finite, got ({x}, {y})")]
    InvalidSpriteOffset { x: f64, y: f64 },

    #[error("noise seed must be finite, got {0}")]
    NonFiniteSeed(f64),

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("invalid atlas descriptor: {0}")]
    InvalidDescriptor(#[from] ConfigError),

    #[error("failed to load atlas image {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("atlas image is {actual_width}x{actual_height} but the descriptor needs {needed_width}x{needed_height}")]
    TooSmall {
        actual_width: u32,
        actual_height: u32,
        needed_width: u32,
        needed_height: u32,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to save image {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}

/// Top-level error for the binaries.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Atlas(#[from] AtlasError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Viewer(#[from] ViewerError),
}
