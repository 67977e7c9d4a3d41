//! Catalog error types (spec §7).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("frame not found: {0}")]
    FrameNotFound(String),

    #[error("raster not found: hash {0:016x}")]
    RasterNotFound(u64),

    #[error("track not found: {0}")]
    TrackNotFound(String),

    #[error("requested more than MAX_FRAMES_PER_ITERATOR ({max}) frames: {requested}")]
    TooManyFrames { requested: usize, max: usize },

    #[error("bad catalog file magic in {path}")]
    BadMagic { path: String },

    #[error(transparent)]
    Core(#[from] alfalfa_core::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
