//! alfalfa-catalog: the persistent Frames/Rasters/Quality/Tracks/Switches
//! tables and their query surface (C4, spec §4.4).

pub mod error;
pub mod records;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use records::{FrameRecord, QualityRecord, RasterRecord, SwitchRecord, TrackRecord};
pub use service::{Catalog, MAX_FRAMES_PER_ITERATOR};
