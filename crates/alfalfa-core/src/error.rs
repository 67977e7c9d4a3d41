//! Error types for alfalfa-core

use thiserror::Error;

/// Errors raised by the raster store and explicit-state model.
#[derive(Error, Debug)]
pub enum Error {
    #[error("raster dimensions {width}x{height} are not a multiple of 16 after padding")]
    BadDimensions { width: u32, height: u32 },

    #[error("plane index {0} out of range (Y=0, U=1, V=2)")]
    BadPlane(usize),

    #[error("malformed frame name: {0}")]
    BadFrameName(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
