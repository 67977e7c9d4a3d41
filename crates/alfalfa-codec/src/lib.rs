//! alfalfa-codec: the VP8 decoder core (C2) — bitstream parsing, entropy
//! decoding, prediction, transforms, and the in-loop deblocking filter.
//!
//! Operates purely on bytes in, [`alfalfa_core::Raster`] out; it has no
//! knowledge of the catalog or player above it, mirroring how the teacher
//! keeps its per-codec crates (`bitvue-vp9`, `bitvue-av1`) independent of
//! its UI and format crates.

pub mod bool_decoder;
pub mod decoder;
pub mod error;
pub mod frame_header;
pub mod loopfilter;
pub mod macroblock;
pub mod modes;
pub mod prediction;
pub mod quantization;
pub mod tokens;
pub mod transform;
pub mod uncompressed_chunk;

pub use decoder::{concealment_frame, DecodedFrame, Decoder};
pub use error::{Error, Result};
pub use uncompressed_chunk::{CorruptionLevel, LoopFilterType, UncompressedChunk};
