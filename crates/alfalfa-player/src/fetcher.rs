//! FrameFetcher: the background HTTP range-fetch worker behind adaptive
//! playback (spec §4.5 "Frame fetcher", §5 concurrency model).
//!
//! Grounded on `examples/original_source/src/util/frame_fetcher.cc` /
//! `.hh`: one background thread, a wishlist of outstanding byte-range
//! requests, a local store of fetched bytes keyed by offset, and an
//! exponentially-weighted-moving-average throughput estimate (`alpha =
//! 1/4`). Threading style (a `Mutex` guarding shared state plus two
//! condvars rather than a channel) follows the original's own
//! two-condvar design, since a single channel cannot express "wait
//! until this specific byte range has arrived."

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::{Error, Result};

/// EWMA smoothing factor for throughput estimation (spec §4.5).
const THROUGHPUT_ALPHA: f64 = 0.25;

/// A batch is cut short once its estimated fetch time would exceed this,
/// so one slow batch can't starve the player of a response (spec §4.5
/// step 1).
const MAX_BATCH_FETCH_SECONDS: f64 = 0.5;

/// Or once this many frames have been selected, whichever comes first.
const MAX_BATCH_FRAMES: usize = 96;

/// One entry of the wishlist: the player's description of a frame it
/// intends to consume next (spec §4.5).
#[derive(Debug, Clone)]
pub struct WishlistEntry {
    pub frame_id: u64,
    pub offset: u64,
    pub length: u64,
    pub shown: bool,
    pub quality: f64,
}

struct Shared {
    wishlist: VecDeque<WishlistEntry>,
    local_store: HashMap<u64, Vec<u8>>,
    shutdown: bool,
    throughput_bytes_per_sec: f64,
}

/// Background worker that turns wishlisted byte ranges into HTTP range
/// GETs, batching requests so no single batch takes longer than
/// `MAX_BATCH_FETCH_SECONDS` to fetch at the current throughput
/// estimate.
pub struct FrameFetcher {
    state: Arc<Mutex<Shared>>,
    new_request_or_shutdown: Arc<Condvar>,
    new_response: Arc<Condvar>,
    worker: Option<JoinHandle<()>>,
}

impl FrameFetcher {
    pub fn new(base_url: String) -> Self {
        let state = Arc::new(Mutex::new(Shared {
            wishlist: VecDeque::new(),
            local_store: HashMap::new(),
            shutdown: false,
            throughput_bytes_per_sec: 0.0,
        }));
        let new_request_or_shutdown = Arc::new(Condvar::new());
        let new_response = Arc::new(Condvar::new());

        let worker_state = state.clone();
        let worker_request_cv = new_request_or_shutdown.clone();
        let worker_response_cv = new_response.clone();
        let worker = std::thread::spawn(move || {
            worker_loop(base_url, worker_state, worker_request_cv, worker_response_cv)
        });

        Self {
            state,
            new_request_or_shutdown,
            new_response,
            worker: Some(worker),
        }
    }

    /// Replace the wishlist wholesale, as the planner does on every new
    /// plan (`set_frame_plan`).
    pub fn set_frame_plan(&self, entries: Vec<WishlistEntry>) {
        let mut state = self.state.lock().unwrap();
        state.wishlist = entries.into_iter().collect();
        self.new_request_or_shutdown.notify_one();
    }

    /// Append one entry to the wishlist, waking the worker.
    pub fn request(&self, entry: WishlistEntry) {
        let mut state = self.state.lock().unwrap();
        state.wishlist.push_back(entry);
        self.new_request_or_shutdown.notify_one();
    }

    /// True if `offset` is already in the local store.
    pub fn is_present(&self, offset: u64) -> bool {
        self.state.lock().unwrap().local_store.contains_key(&offset)
    }

    /// Block until the frame at `offset` has been fetched, or the
    /// fetcher is shut down.
    pub fn wait_for(&self, offset: u64) -> Result<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(bytes) = state.local_store.get(&offset) {
                return Ok(bytes.clone());
            }
            if state.shutdown {
                return Err(Error::ShutDown);
            }
            state = self.new_response.wait(state).unwrap();
        }
    }

    /// The current EWMA throughput estimate in bytes/sec, used by the
    /// planner's feasibility check (spec §4.5).
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        self.state.lock().unwrap().throughput_bytes_per_sec
    }

    pub fn shutdown(&mut self) {
        {
            let mut state = self.state.lock().unwrap();
            state.shutdown = true;
        }
        self.new_request_or_shutdown.notify_all();
        self.new_response.notify_all();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for FrameFetcher {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown();
        }
    }
}

fn worker_loop(
    base_url: String,
    state: Arc<Mutex<Shared>>,
    request_cv: Arc<Condvar>,
    response_cv: Arc<Condvar>,
) {
    let client = reqwest::blocking::Client::new();

    loop {
        let batch: Vec<WishlistEntry> = {
            let mut guard = state.lock().unwrap();
            loop {
                if guard.shutdown {
                    return;
                }
                let throughput = guard.throughput_bytes_per_sec.max(1.0);
                let mut selected = Vec::new();
                let mut estimated_seconds = 0.0;
                for entry in guard.wishlist.iter() {
                    if guard.local_store.contains_key(&entry.offset) {
                        continue;
                    }
                    let entry_seconds = entry.length as f64 / throughput;
                    if !selected.is_empty()
                        && (estimated_seconds + entry_seconds > MAX_BATCH_FETCH_SECONDS
                            || selected.len() >= MAX_BATCH_FRAMES)
                    {
                        break;
                    }
                    estimated_seconds += entry_seconds;
                    selected.push(entry.clone());
                    if selected.len() >= MAX_BATCH_FRAMES {
                        break;
                    }
                }
                if !selected.is_empty() {
                    break selected;
                }
                guard = request_cv.wait(guard).unwrap();
            }
        };

        let started = Instant::now();
        match fetch_batch(&client, &base_url, &batch) {
            Ok(fetched) => {
                let total_bytes: u64 = fetched.iter().map(|(_, b)| b.len() as u64).sum();
                let elapsed = started.elapsed().as_secs_f64().max(0.001);
                let sample = total_bytes as f64 / elapsed;

                let mut guard = state.lock().unwrap();
                for (offset, bytes) in fetched {
                    guard.local_store.insert(offset, bytes);
                }
                guard.throughput_bytes_per_sec = if guard.throughput_bytes_per_sec == 0.0 {
                    sample
                } else {
                    THROUGHPUT_ALPHA * sample + (1.0 - THROUGHPUT_ALPHA) * guard.throughput_bytes_per_sec
                };
                drop(guard);
                response_cv.notify_all();
            }
            Err(e) => {
                warn!(error = %e, "range fetch failed, entries remain on the wishlist for retry");
            }
        }
    }
}

fn fetch_batch(client: &reqwest::blocking::Client, base_url: &str, batch: &[WishlistEntry]) -> Result<Vec<(u64, Vec<u8>)>> {
    if batch.is_empty() {
        return Ok(Vec::new());
    }
    let spec = batch
        .iter()
        .map(|e| format!("{}-{}", e.offset, e.offset + e.length - 1))
        .collect::<Vec<_>>()
        .join(",");

    let response = client
        .get(base_url)
        .header("Range", format!("bytes={spec}"))
        .send()
        .map_err(|e| Error::Http(e.to_string()))?;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let content_range = response
        .headers()
        .get("content-range")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = response.bytes().map_err(|e| Error::Http(e.to_string()))?;

    if content_type.starts_with("multipart/byteranges") {
        parse_multipart_byteranges(&content_type, &body)
    } else if let Some(range) = content_range {
        let offset = parse_content_range_offset(&range)?;
        Ok(vec![(offset, body.to_vec())])
    } else if batch.len() == 1 {
        Ok(vec![(batch[0].offset, body.to_vec())])
    } else {
        Err(Error::MalformedRangeResponse(
            "multi-range request got a non-multipart, non-Content-Range response".to_string(),
        ))
    }
}

fn parse_content_range_offset(header: &str) -> Result<u64> {
    // "bytes 100-199/1000"
    let rest = header
        .strip_prefix("bytes ")
        .ok_or_else(|| Error::MalformedRangeResponse(header.to_string()))?;
    let start = rest
        .split('-')
        .next()
        .ok_or_else(|| Error::MalformedRangeResponse(header.to_string()))?;
    start
        .parse()
        .map_err(|_| Error::MalformedRangeResponse(header.to_string()))
}

/// Parse a `multipart/byteranges` response body into `(offset, bytes)`
/// pairs, one per part, per spec §4.5 step 3.
fn parse_multipart_byteranges(content_type: &str, body: &[u8]) -> Result<Vec<(u64, Vec<u8>)>> {
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| Error::MalformedRangeResponse("missing boundary".to_string()))?
        .trim_matches('"');
    let delimiter = format!("--{boundary}").into_bytes();

    let mut parts = Vec::new();
    let mut cursor = 0usize;
    while let Some(rel) = find_subslice(&body[cursor..], &delimiter) {
        cursor += rel + delimiter.len();
        if body[cursor..].starts_with(b"--") {
            break;
        }
        let header_end = find_subslice(&body[cursor..], b"\r\n\r\n")
            .map(|i| cursor + i + 4)
            .ok_or_else(|| Error::MalformedRangeResponse("missing header terminator".to_string()))?;
        let headers = std::str::from_utf8(&body[cursor..header_end]).unwrap_or("");
        let content_range = headers
            .lines()
            .find(|l| l.to_ascii_lowercase().starts_with("content-range"))
            .ok_or_else(|| Error::MalformedRangeResponse("part missing Content-Range".to_string()))?;
        let offset = parse_content_range_offset(content_range.split(": ").nth(1).unwrap_or("").trim())?;

        let next_delim = find_subslice(&body[header_end..], &delimiter)
            .map(|i| header_end + i)
            .unwrap_or(body.len());
        let mut data_end = next_delim;
        if data_end >= 2 && &body[data_end - 2..data_end] == b"\r\n" {
            data_end -= 2;
        }
        parts.push((offset, body[header_end..data_end].to_vec()));
        cursor = next_delim;
    }
    Ok(parts)
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// One shown frame's presentation interval, 1/24s, per spec §4.5.
pub const PRESENTATION_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 24);

/// Walk the wishlist front-to-back, charging `length / (0.8 *
/// throughput)` to an arrival clock for each not-yet-downloaded entry
/// and advancing a presentation clock by 1/24s per shown frame; the
/// plan is feasible iff arrival never overtakes presentation (spec
/// §4.5 "Feasibility").
pub fn is_feasible(entries: &[WishlistEntry], present: impl Fn(u64) -> bool, throughput_bytes_per_sec: f64) -> bool {
    const FEASIBILITY_DISCOUNT: f64 = 0.8;
    let mut arrival = 0.0f64;
    let mut presentation = 0.0f64;
    let effective_rate = (throughput_bytes_per_sec * FEASIBILITY_DISCOUNT).max(f64::MIN_POSITIVE);

    for entry in entries {
        if !present(entry.offset) {
            arrival += entry.length as f64 / effective_rate;
        }
        if entry.shown {
            presentation += PRESENTATION_INTERVAL.as_secs_f64();
        }
        if arrival > presentation {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(offset: u64, length: u64, shown: bool) -> WishlistEntry {
        WishlistEntry {
            frame_id: offset,
            offset,
            length,
            shown,
            quality: 1.0,
        }
    }

    #[test]
    fn feasible_when_throughput_comfortably_exceeds_need() {
        let entries = vec![entry(0, 1000, true), entry(1000, 1000, true)];
        assert!(is_feasible(&entries, |_| false, 10_000_000.0));
    }

    #[test]
    fn infeasible_when_throughput_is_too_slow() {
        let entries = vec![entry(0, 100_000_000, true)];
        assert!(!is_feasible(&entries, |_| false, 1_000.0));
    }

    #[test]
    fn already_present_entries_do_not_charge_arrival_time() {
        let entries = vec![entry(0, 100_000_000, true)];
        assert!(is_feasible(&entries, |_| true, 1.0));
    }

    #[test]
    fn content_range_offset_parses_the_start_byte() {
        assert_eq!(parse_content_range_offset("bytes 100-199/1000").unwrap(), 100);
    }
}
