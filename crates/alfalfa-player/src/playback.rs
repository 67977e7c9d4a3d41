//! Playback loop: walks a plan frame by frame against a real-time
//! presentation clock, stalling cooperatively when required bytes are
//! not yet local (spec §4.5 "Playback loop", §5 "Cancellation").

use std::collections::VecDeque;
use std::thread;
use std::time::Instant;

use tracing::warn;

use crate::error::Result;
use crate::fetcher::{FrameFetcher, PRESENTATION_INTERVAL};
use crate::planner::AnnotatedFrameInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Stalled,
}

/// Drives a plan forward one frame at a time, calling `draw` for each
/// shown frame at its scheduled presentation time, stalling on the
/// fetcher's cooperative wait rather than dropping frames (spec §5
/// "Timeouts").
pub struct PlaybackLoop<'a> {
    fetcher: &'a FrameFetcher,
    next_raster_time: Instant,
    state: PlaybackState,
}

impl<'a> PlaybackLoop<'a> {
    pub fn new(fetcher: &'a FrameFetcher) -> Self {
        Self {
            fetcher,
            next_raster_time: Instant::now(),
            state: PlaybackState::Playing,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Consume the plan, drawing each shown frame via `draw` at its
    /// scheduled time. Returns once the plan is exhausted, or
    /// propagates `Error::ShutDown` if the fetcher is torn down while
    /// stalled.
    pub fn run(&mut self, mut plan: VecDeque<AnnotatedFrameInfo>, mut draw: impl FnMut(&AnnotatedFrameInfo)) -> Result<()> {
        while let Some(next) = plan.pop_front() {
            self.play_one(&next, &mut draw)?;
        }
        Ok(())
    }

    fn play_one(&mut self, frame: &AnnotatedFrameInfo, draw: &mut impl FnMut(&AnnotatedFrameInfo)) -> Result<()> {
        if !self.fetcher.is_present(frame.frame.offset) {
            self.enter_stall(frame);
            self.fetcher.wait_for(frame.frame.offset)?;
            self.state = PlaybackState::Playing;
        }

        let now = Instant::now();
        if self.next_raster_time > now {
            thread::sleep(self.next_raster_time - now);
        }

        if frame.frame.shown {
            draw(frame);
            self.next_raster_time += PRESENTATION_INTERVAL;
        }
        Ok(())
    }

    fn enter_stall(&mut self, frame: &AnnotatedFrameInfo) {
        self.state = PlaybackState::Stalled;
        let predicted = frame.annotation.time_to_fetch;
        warn!(
            frame_id = frame.frame.frame_id,
            predicted_stall_seconds = predicted,
            "predicted stall in {predicted:.2} seconds"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::WishlistEntry;
    use crate::video_map::{AbridgedFrameInfo, FrameAnnotation};

    fn annotated(offset: u64, shown: bool) -> AnnotatedFrameInfo {
        AnnotatedFrameInfo {
            track_id: "t0".to_string(),
            index: 0,
            frame: AbridgedFrameInfo {
                frame_id: offset,
                offset,
                length: 10,
                key: false,
                shown,
                quality: 1.0,
                timestamp: 0,
            },
            annotation: FrameAnnotation {
                mean_quality: 1.0,
                stddev_quality: 0.0,
                min_quality: 1.0,
                time_to_fetch: 0.0,
                time_margin_required: 0.0,
            },
        }
    }

    #[test]
    fn run_draws_every_shown_frame_already_present() {
        let fetcher = FrameFetcher::new("http://example.invalid/video".to_string());
        // Pre-populate the local store directly isn't exposed, so use a
        // plan whose frames are all marked not-shown to avoid stalling
        // on an empty store while still exercising the loop structure.
        let mut plan = VecDeque::new();
        plan.push_back(annotated(0, false));
        plan.push_back(annotated(10, false));

        let mut drawn = 0;
        let mut loop_ = PlaybackLoop::new(&fetcher);
        loop_.run(plan, |_| drawn += 1).unwrap();
        assert_eq!(drawn, 0);
        assert_eq!(loop_.state(), PlaybackState::Playing);
    }

    #[test]
    fn request_marks_entry_pending_until_fetched() {
        let fetcher = FrameFetcher::new("http://example.invalid/video".to_string());
        assert!(!fetcher.is_present(0));
        fetcher.request(WishlistEntry {
            frame_id: 0,
            offset: 0,
            length: 10,
            shown: true,
            quality: 1.0,
        });
        // Without a live server the entry never arrives; this simply
        // checks that requesting doesn't itself mark it present.
        assert!(!fetcher.is_present(0));
    }
}
