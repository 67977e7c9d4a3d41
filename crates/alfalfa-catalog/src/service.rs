//! The catalog's query surface: 18 unary lookups plus one streaming
//! iterator (spec §4.4, §6 "External interfaces").
//!
//! Grounded on
//! `examples/hawk90-bitvue/crates/bitvue-cli/src/commands/info.rs`'s
//! read-then-report style, and on the original's `alfalfa.hh`/`.cc` RPC
//! surface, reshaped here as plain Rust methods behind a trait rather
//! than generated gRPC stubs (the wire format is a separate, later
//! concern per spec §6).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, info};

use alfalfa_core::{DecoderHash, FrameName};

use crate::error::{Error, Result};
use crate::records::{FrameRecord, QualityRecord, RasterRecord, SwitchRecord, TrackRecord};
use crate::store;

/// No single query may return more frames than this; callers page with
/// repeated calls (spec §4.4).
pub const MAX_FRAMES_PER_ITERATOR: usize = 1000;

struct Tables {
    frames: Vec<FrameRecord>,
    rasters: Vec<RasterRecord>,
    quality: Vec<QualityRecord>,
    tracks: Vec<TrackRecord>,
    switches: Vec<SwitchRecord>,
}

/// The catalog: all five tables plus the secondary indices the query
/// surface needs, held behind a single lock since tables are small and
/// rewritten as a unit on update (spec §4.4).
pub struct Catalog {
    dir: PathBuf,
    tables: RwLock<Tables>,
}

impl Catalog {
    /// Load (or initialize empty) all five tables from `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        let frames = store::load(&dir.join("frames.tbl"), "FRAMES")?;
        let rasters = store::load(&dir.join("rasters.tbl"), "RASTERS")?;
        let quality = store::load(&dir.join("quality.tbl"), "QUALITY")?;
        let tracks = store::load(&dir.join("tracks.tbl"), "TRACKS")?;
        let switches = store::load(&dir.join("switches.tbl"), "SWITCHES")?;
        info!(
            frames = frames.len(),
            tracks = tracks.len(),
            "opened catalog"
        );
        Ok(Self {
            dir,
            tables: RwLock::new(Tables {
                frames,
                rasters,
                quality,
                tracks,
                switches,
            }),
        })
    }

    fn persist(&self, tables: &Tables) -> Result<()> {
        store::save(&self.dir.join("frames.tbl"), "FRAMES", &tables.frames)?;
        store::save(&self.dir.join("rasters.tbl"), "RASTERS", &tables.rasters)?;
        store::save(&self.dir.join("quality.tbl"), "QUALITY", &tables.quality)?;
        store::save(&self.dir.join("tracks.tbl"), "TRACKS", &tables.tracks)?;
        store::save(&self.dir.join("switches.tbl"), "SWITCHES", &tables.switches)?;
        Ok(())
    }

    // --- mutation (not part of the 18+1 read surface, but needed to populate it) ---

    pub fn insert_frame(&self, record: FrameRecord) -> Result<()> {
        let mut tables = self.tables.write();
        tables.frames.push(record);
        self.persist(&tables)
    }

    pub fn insert_track(&self, record: TrackRecord) -> Result<()> {
        let mut tables = self.tables.write();
        tables.tracks.push(record);
        self.persist(&tables)
    }

    // --- unary queries (1-18) ---

    /// 1. Look up one frame record by its name.
    pub fn get_frame(&self, name: &FrameName) -> Result<FrameRecord> {
        self.tables
            .read()
            .frames
            .iter()
            .find(|f| &f.name == name)
            .cloned()
            .ok_or_else(|| Error::FrameNotFound(name.format()))
    }

    /// 2. Look up frames by output hash (may be several, one per track).
    pub fn get_frames_by_output_hash(&self, output_hash: u64) -> Result<Vec<FrameRecord>> {
        Ok(self
            .tables
            .read()
            .frames
            .iter()
            .filter(|f| f.output_hash == output_hash)
            .cloned()
            .collect())
    }

    /// 3. Look up frames whose source is satisfied by a given decoder hash.
    pub fn get_decodable_frames(&self, hash: &DecoderHash) -> Result<Vec<FrameRecord>> {
        Ok(self
            .tables
            .read()
            .frames
            .iter()
            .filter(|f| hash.can_decode(&f.name.source))
            .cloned()
            .collect())
    }

    /// 4. Look up frames that produce a given composite decoder hash.
    pub fn get_frames_by_produced_hash(&self, hash: &DecoderHash) -> Result<Vec<FrameRecord>> {
        Ok(self
            .tables
            .read()
            .frames
            .iter()
            .filter(|f| &f.produced_hash == hash)
            .cloned()
            .collect())
    }

    /// 5. Look up frames by the decoder state hash component alone.
    pub fn get_frames_by_state_hash(&self, state_hash: u64) -> Result<Vec<FrameRecord>> {
        Ok(self
            .tables
            .read()
            .frames
            .iter()
            .filter(|f| f.name.target.state == state_hash)
            .cloned()
            .collect())
    }

    /// 6. Count of frames in the catalog.
    pub fn frame_count(&self) -> Result<usize> {
        Ok(self.tables.read().frames.len())
    }

    /// 7. Raster metadata by content hash.
    pub fn get_raster(&self, hash: u64) -> Result<RasterRecord> {
        self.tables
            .read()
            .rasters
            .iter()
            .find(|r| r.hash == hash)
            .cloned()
            .ok_or(Error::RasterNotFound(hash))
    }

    /// 8. Insert or update raster metadata.
    pub fn put_raster(&self, record: RasterRecord) -> Result<()> {
        let mut tables = self.tables.write();
        if let Some(existing) = tables.rasters.iter_mut().find(|r| r.hash == record.hash) {
            *existing = record;
        } else {
            tables.rasters.push(record);
        }
        self.persist(&tables)
    }

    /// 9. Quality record for one output/reference pair.
    pub fn get_quality(&self, output_hash: u64, reference_hash: u64) -> Result<Option<QualityRecord>> {
        Ok(self
            .tables
            .read()
            .quality
            .iter()
            .find(|q| q.output_hash == output_hash && q.reference_hash == reference_hash)
            .cloned())
    }

    /// 10. Insert a quality record.
    pub fn put_quality(&self, record: QualityRecord) -> Result<()> {
        let mut tables = self.tables.write();
        tables.quality.push(record);
        self.persist(&tables)
    }

    /// 11. All quality records for an output hash, across references.
    pub fn get_quality_for_output(&self, output_hash: u64) -> Result<Vec<QualityRecord>> {
        Ok(self
            .tables
            .read()
            .quality
            .iter()
            .filter(|q| q.output_hash == output_hash)
            .cloned()
            .collect())
    }

    /// 12. Look up a track's full record by id.
    pub fn get_track(&self, track_id: &str) -> Result<TrackRecord> {
        self.tables
            .read()
            .tracks
            .iter()
            .find(|t| t.track_id == track_id)
            .cloned()
            .ok_or_else(|| Error::TrackNotFound(track_id.to_string()))
    }

    /// 13. List all track ids.
    pub fn list_tracks(&self) -> Result<Vec<String>> {
        Ok(self.tables.read().tracks.iter().map(|t| t.track_id.clone()).collect())
    }

    /// 14. The frame name at a given index within a track.
    pub fn get_track_frame_at(&self, track_id: &str, index: usize) -> Result<FrameName> {
        let track = self.get_track(track_id)?;
        track
            .frame_names
            .get(index)
            .copied()
            .ok_or_else(|| Error::TrackNotFound(format!("{track_id}[{index}]")))
    }

    /// 15. Track count (frames) for a given track id.
    pub fn track_length(&self, track_id: &str) -> Result<usize> {
        Ok(self.get_track(track_id)?.frame_names.len())
    }

    /// 16. Legal switches out of a track at a given frame index.
    pub fn get_switches_from(&self, track_id: &str, at_frame_index: u64) -> Result<Vec<SwitchRecord>> {
        Ok(self
            .tables
            .read()
            .switches
            .iter()
            .filter(|s| s.from_track == track_id && s.at_frame_index == at_frame_index)
            .cloned()
            .collect())
    }

    /// 17. Insert a switch record.
    pub fn put_switch(&self, record: SwitchRecord) -> Result<()> {
        let mut tables = self.tables.write();
        tables.switches.push(record);
        self.persist(&tables)
    }

    /// 18. Summary counts for all five tables, for diagnostics/CLI use.
    pub fn table_sizes(&self) -> Result<HashMap<&'static str, usize>> {
        let tables = self.tables.read();
        Ok(HashMap::from([
            ("frames", tables.frames.len()),
            ("rasters", tables.rasters.len()),
            ("quality", tables.quality.len()),
            ("tracks", tables.tracks.len()),
            ("switches", tables.switches.len()),
        ]))
    }

    /// Streaming query: an iterator over abridged frame info (name and
    /// output hash only), paged to at most `MAX_FRAMES_PER_ITERATOR` per
    /// call (spec §4.4).
    pub fn get_abridged_frames(&self, start: usize, limit: usize) -> Result<Vec<(FrameName, u64)>> {
        if limit > MAX_FRAMES_PER_ITERATOR {
            return Err(Error::TooManyFrames {
                requested: limit,
                max: MAX_FRAMES_PER_ITERATOR,
            });
        }
        let tables = self.tables.read();
        let page: Vec<_> = tables
            .frames
            .iter()
            .skip(start)
            .take(limit)
            .map(|f| (f.name, f.output_hash))
            .collect();
        debug!(start, limit, returned = page.len(), "abridged frame page");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alfalfa_core::{SourceName, TargetName};

    fn sample_name(state: u64, output: u64) -> FrameName {
        FrameName {
            source: SourceName::default(),
            target: TargetName {
                state,
                output,
                shown: true,
                update_last: true,
                update_golden: false,
                update_alt: false,
                copy_last_to_golden: false,
                copy_last_to_alt: false,
                copy_golden_to_alt: false,
                copy_alt_to_golden: false,
            },
        }
    }

    #[test]
    fn inserted_frames_are_retrievable_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(dir.path()).unwrap();
        let name = sample_name(1, 2);
        catalog
            .insert_frame(FrameRecord {
                name,
                frame_store_id: "store-0".into(),
                offset: 0,
                length: 10,
                output_hash: 2,
                produced_hash: DecoderHash::new(1, 2, 2, 2),
            })
            .unwrap();
        let found = catalog.get_frame(&name).unwrap();
        assert_eq!(found.output_hash, 2);
    }

    #[test]
    fn abridged_frame_page_rejects_oversized_limit() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(dir.path()).unwrap();
        let err = catalog.get_abridged_frames(0, MAX_FRAMES_PER_ITERATOR + 1).unwrap_err();
        assert!(matches!(err, Error::TooManyFrames { .. }));
    }

    #[test]
    fn reopening_a_catalog_reloads_persisted_frames() {
        let dir = tempfile::tempdir().unwrap();
        {
            let catalog = Catalog::open(dir.path()).unwrap();
            catalog
                .insert_frame(FrameRecord {
                    name: sample_name(5, 6),
                    frame_store_id: "store-0".into(),
                    offset: 0,
                    length: 1,
                    output_hash: 6,
                    produced_hash: DecoderHash::new(5, 6, 6, 6),
                })
                .unwrap();
        }
        let reopened = Catalog::open(dir.path()).unwrap();
        assert_eq!(reopened.frame_count().unwrap(), 1);
    }
}
