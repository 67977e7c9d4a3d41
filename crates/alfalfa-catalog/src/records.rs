//! The five logical tables of the catalog (spec §4.4): Frames, Rasters,
//! Quality, Tracks, Switches.

use serde::{Deserialize, Serialize};

use alfalfa_core::{DecoderHash, FrameName};

/// One entry in the Frames table: a compressed frame's byte range in its
/// backing frame store, its source/target names, and the decoder hash it
/// produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub name: FrameName,
    pub frame_store_id: String,
    pub offset: u64,
    pub length: u64,
    pub output_hash: u64,
    pub produced_hash: DecoderHash,
}

/// One entry in the Rasters table: maps a raster's content hash to the
/// track/frame that can produce it, for display-side lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterRecord {
    pub hash: u64,
    pub width: u32,
    pub height: u32,
}

/// One entry in the Quality table: a quality metric for one output raster
/// against a reference (spec §4.4, produced by `alfalfa-metrics`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRecord {
    pub output_hash: u64,
    pub reference_hash: u64,
    pub psnr_y: f64,
    pub psnr_u: f64,
    pub psnr_v: f64,
    pub ssim_y: f64,
}

/// One entry in the Tracks table: the ordered sequence of frame names a
/// named encode track produces, plus its nominal bitrate and resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_id: String,
    pub frame_names: Vec<FrameName>,
    pub nominal_bitrate: u64,
    pub width: u32,
    pub height: u32,
}

/// One entry in the Switches table: a precomputed legal transition
/// between two tracks at a given frame, used by the player's planner to
/// avoid re-deriving dependency compatibility at playback time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchRecord {
    pub from_track: String,
    pub to_track: String,
    pub at_frame_index: u64,
    pub via_frame: FrameName,
}
