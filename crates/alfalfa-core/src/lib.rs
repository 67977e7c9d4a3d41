//! alfalfa-core: the raster/reference store (C1) and explicit-state model
//! (C3) that the VP8 decoder core, catalog, and player all share.
//!
//! This crate has no I/O; it is pure data and hashing, mirroring how the
//! teacher keeps `bitvue-core`'s data types free of codec-specific parsing.

pub mod dependency;
pub mod error;
pub mod hash;
pub mod name;
pub mod raster;
pub mod state;

pub use dependency::DependencyTracker;
pub use error::{Error, Result};
pub use hash::DecoderHash;
pub use name::{apply_update, FrameName, SourceName, TargetName};
pub use raster::{
    MutableRasterHandle, Plane, Raster, RasterHandle, ReferenceFrame, References, SafeRaster,
    TwoDSubRange, TwoDSubRangeMut,
};
pub use state::{
    default_coeff_probs, default_mv_probs, default_uv_mode_probs, default_y_mode_probs,
    CoeffProbs, DecoderState, EntropyTables, FilterAdjustments, MvComponentProbs, MvProbs,
    Segmentation, UvModeProbs, YModeProbs,
};
