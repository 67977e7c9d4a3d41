//! alfalfa-player: the adaptive playback component (C5, spec §4.5).
//!
//! Ties together the frame fetcher (HTTP range-GET worker and
//! throughput estimate), the video map (per-track ingest and suffix
//! analysis), and the planner (figure-of-merit frame selection) behind
//! a playback loop that draws frames against a real-time clock.

pub mod error;
pub mod fetcher;
pub mod planner;
pub mod playback;
pub mod video_map;

pub use error::{Error, Result};
pub use fetcher::{is_feasible, FrameFetcher, WishlistEntry, PRESENTATION_INTERVAL};
pub use planner::{AnnotatedFrameInfo, Planner};
pub use playback::{PlaybackLoop, PlaybackState};
pub use video_map::{AbridgedFrameInfo, FrameAnnotation, VideoMap};
