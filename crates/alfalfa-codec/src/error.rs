//! Error types for the VP8 decoder core (spec §7).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid bitstream at offset {offset}: {message}")]
    Invalid { offset: usize, message: String },

    #[error("unsupported feature: {0}")]
    Unsupported(String),

    #[error("internal invariant violated: {0}")]
    LogicError(String),

    #[error("truncated frame: needed {needed} bytes, had {available}")]
    Truncated { needed: usize, available: usize },

    #[error(transparent)]
    Core(#[from] alfalfa_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
