//! VideoMap: per-track ingestion of abridged frame info and the suffix
//! analysis the planner reads from (spec §4.5 "VideoMap", §5
//! concurrency model).
//!
//! Grounded on `examples/original_source/src/player/video_map.cc` /
//! `.hh` for the suffix-analysis recurrence, and on
//! `examples/hawk90-bitvue/crates/bitvue-core/src/worker.rs` for the
//! `parking_lot`-guarded shared state plus try-lock-gated background
//! recomputation pattern.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

/// One 1/24s presentation tick (spec §4.5).
const PRESENTATION_INTERVAL_SECS: f64 = 1.0 / 24.0;

/// Suffix analysis is never rerun for the same track more than this
/// often; redundant triggers inside the window are dropped (spec §5).
const MIN_ANALYSIS_INTERVAL: Duration = Duration::from_millis(250);

/// One frame's metadata as streamed from the catalog's abridged-frame
/// query (spec §4.5).
#[derive(Debug, Clone)]
pub struct AbridgedFrameInfo {
    pub frame_id: u64,
    pub offset: u64,
    pub length: u64,
    pub key: bool,
    pub shown: bool,
    pub quality: f64,
    /// Displayed-raster index, used to align keyframes across tracks.
    pub timestamp: u64,
}

/// Per-frame suffix statistics computed by the reverse traversal (spec
/// §4.5 "VideoMap").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAnnotation {
    pub mean_quality: f64,
    pub stddev_quality: f64,
    pub min_quality: f64,
    pub time_to_fetch: f64,
    pub time_margin_required: f64,
}

struct TrackState {
    frames: Vec<AbridgedFrameInfo>,
    annotations: Vec<FrameAnnotation>,
    last_analysis: Instant,
}

impl TrackState {
    fn new() -> Self {
        Self {
            frames: Vec::new(),
            annotations: Vec::new(),
            last_analysis: Instant::now() - MIN_ANALYSIS_INTERVAL,
        }
    }
}

/// Shared per-track ingest state plus the monotonic generation counter
/// clients poll to detect a fresh analysis (spec §5).
pub struct VideoMap {
    tracks: RwLock<HashMap<String, TrackState>>,
    analysis_gate: Mutex<()>,
    generation: Mutex<u64>,
}

impl Default for VideoMap {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoMap {
    pub fn new() -> Self {
        Self {
            tracks: RwLock::new(HashMap::new()),
            analysis_gate: Mutex::new(()),
            generation: Mutex::new(0),
        }
    }

    /// Ingest one frame from a track's streaming source (spec §4.5: up
    /// to 1000 frames/s, though this call itself does not rate-limit —
    /// the caller's RPC stream does).
    pub fn ingest_frame(&self, track_id: &str, info: AbridgedFrameInfo) {
        let mut tracks = self.tracks.write();
        tracks
            .entry(track_id.to_string())
            .or_insert_with(TrackState::new)
            .frames
            .push(info);
    }

    pub fn analysis_generation(&self) -> u64 {
        *self.generation.lock()
    }

    pub fn track_ids(&self) -> Vec<String> {
        self.tracks.read().keys().cloned().collect()
    }

    pub fn frame_count(&self, track_id: &str) -> usize {
        self.tracks.read().get(track_id).map(|t| t.frames.len()).unwrap_or(0)
    }

    pub fn frame_at(&self, track_id: &str, index: usize) -> Option<AbridgedFrameInfo> {
        self.tracks.read().get(track_id)?.frames.get(index).cloned()
    }

    pub fn annotation_at(&self, track_id: &str, index: usize) -> Option<FrameAnnotation> {
        self.tracks.read().get(track_id)?.annotations.get(index).copied()
    }

    /// The next keyframe in `track_id` whose timestamp is exactly
    /// `timestamp`, if any (used by the planner to find cross-track
    /// switch points, spec §4.5 step 1).
    pub fn keyframe_at_timestamp(&self, track_id: &str, timestamp: u64) -> Option<usize> {
        self.tracks
            .read()
            .get(track_id)?
            .frames
            .iter()
            .position(|f| f.key && f.timestamp == timestamp)
    }

    /// Recompute the suffix analysis for every track whose ingest has
    /// outpaced its last analysis, gated to at most once per 250ms via
    /// a try-lock: a redundant trigger while one run is in flight is
    /// simply dropped (spec §5).
    pub fn maybe_run_analysis(&self, is_present: impl Fn(u64) -> bool, throughput_bytes_per_sec: f64) {
        let Some(_guard) = self.analysis_gate.try_lock() else {
            return;
        };

        let mut tracks = self.tracks.write();
        let mut ran_any = false;
        for (track_id, state) in tracks.iter_mut() {
            if state.last_analysis.elapsed() < MIN_ANALYSIS_INTERVAL {
                continue;
            }
            run_suffix_analysis(state, &is_present, throughput_bytes_per_sec);
            state.last_analysis = Instant::now();
            ran_any = true;
            debug!(track_id, frames = state.frames.len(), "suffix analysis recomputed");
        }
        drop(tracks);

        if ran_any {
            *self.generation.lock() += 1;
        }
    }
}

fn run_suffix_analysis(state: &mut TrackState, is_present: &impl Fn(u64) -> bool, throughput_bytes_per_sec: f64) {
    let n = state.frames.len();
    state.annotations = vec![
        FrameAnnotation {
            mean_quality: 0.0,
            stddev_quality: 0.0,
            min_quality: 0.0,
            time_to_fetch: 0.0,
            time_margin_required: 0.0,
        };
        n
    ];

    let mut sum_quality = 0.0f64;
    let mut sum_sq_quality = 0.0f64;
    let mut count = 0.0f64;
    let mut min_quality = f64::INFINITY;
    let mut time_margin_required = 0.0f64;

    for i in (0..n).rev() {
        let frame = &state.frames[i];
        count += 1.0;
        sum_quality += frame.quality;
        sum_sq_quality += frame.quality * frame.quality;
        min_quality = min_quality.min(frame.quality);

        let mean = sum_quality / count;
        let variance = (sum_sq_quality / count - mean * mean).max(0.0);
        let stddev = variance.sqrt();

        let time_to_fetch = if is_present(frame.offset) {
            0.0
        } else if throughput_bytes_per_sec > 0.0 {
            frame.length as f64 / throughput_bytes_per_sec
        } else {
            0.0
        };

        time_margin_required += time_to_fetch;
        if frame.shown {
            time_margin_required = (time_margin_required - PRESENTATION_INTERVAL_SECS).max(0.0);
        }

        state.annotations[i] = FrameAnnotation {
            mean_quality: mean,
            stddev_quality: stddev,
            min_quality,
            time_to_fetch,
            time_margin_required,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(timestamp: u64, quality: f64, shown: bool, key: bool) -> AbridgedFrameInfo {
        AbridgedFrameInfo {
            frame_id: timestamp,
            offset: timestamp * 100,
            length: 1000,
            key,
            shown,
            quality,
            timestamp,
        }
    }

    #[test]
    fn suffix_analysis_computes_running_stats_from_the_end() {
        let map = VideoMap::new();
        map.ingest_frame("t0", frame(0, 0.9, true, true));
        map.ingest_frame("t0", frame(1, 0.8, true, false));
        map.ingest_frame("t0", frame(2, 0.7, true, false));

        map.maybe_run_analysis(|_| false, 10_000.0);

        let last = map.annotation_at("t0", 2).unwrap();
        assert!((last.mean_quality - 0.7).abs() < 1e-9);
        assert_eq!(last.stddev_quality, 0.0);

        let first = map.annotation_at("t0", 0).unwrap();
        let expected_mean = (0.9 + 0.8 + 0.7) / 3.0;
        assert!((first.mean_quality - expected_mean).abs() < 1e-9);
    }

    #[test]
    fn analysis_gate_skips_a_track_analyzed_within_the_last_250ms() {
        let map = VideoMap::new();
        map.ingest_frame("t0", frame(0, 1.0, true, true));
        map.maybe_run_analysis(|_| false, 1_000.0);
        let gen_after_first = map.analysis_generation();
        map.maybe_run_analysis(|_| false, 1_000.0);
        assert_eq!(map.analysis_generation(), gen_after_first);
    }

    #[test]
    fn keyframe_lookup_finds_matching_timestamp() {
        let map = VideoMap::new();
        map.ingest_frame("t1", frame(0, 1.0, true, false));
        map.ingest_frame("t1", frame(48, 1.0, true, true));
        assert_eq!(map.keyframe_at_timestamp("t1", 48), Some(1));
        assert_eq!(map.keyframe_at_timestamp("t1", 0), None);
    }
}
