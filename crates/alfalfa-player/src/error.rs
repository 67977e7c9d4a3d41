//! Player error types (spec §7).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("frame fetcher was shut down")]
    ShutDown,

    #[error("no playable successor from the current frame")]
    NoPlayableSuccessor,

    #[error("http fetch failed: {0}")]
    Http(String),

    #[error("malformed multipart/byteranges response: {0}")]
    MalformedRangeResponse(String),

    #[error(transparent)]
    Catalog(#[from] alfalfa_catalog::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
