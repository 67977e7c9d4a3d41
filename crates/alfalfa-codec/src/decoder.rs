//! Top-level VP8 decoder: frame parsing, macroblock loop, loop filtering,
//! and reference/state management (spec §4.1).
//!
//! Grounded on `examples/original_source/src/decoder/decoder.hh` /
//! `decoder.cc`: keyframes reset entropy/segmentation/filter-adjustment
//! state to defaults; interframes carry state forward unless the header
//! says otherwise.

use alfalfa_core::{
    DecoderHash, DecoderState, DependencyTracker, MutableRasterHandle, MvComponentProbs, Raster, RasterHandle,
    ReferenceFrame, References, SafeRaster,
};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::frame_header::FrameHeader;
use crate::loopfilter::{filter_plane, resolve_filter_level, FilterParams};
use crate::macroblock::{
    read_interframe_header, read_keyframe_header, read_residue, reconstruct_macroblock, InterNeighbors, MacroblockHeader,
};
use crate::quantization::DequantFactors;
use crate::uncompressed_chunk::{CorruptionLevel, UncompressedChunk};
use crate::bool_decoder::BoolDecoder;

/// A fully decoded frame: the reconstructed raster plus the reference set
/// it produced, ready to be copied out by the raster/reference store.
pub struct DecodedFrame {
    pub raster: RasterHandle,
    pub show_frame: bool,
    pub references: References,
    pub state: DecoderState,
    /// Which of `(state, last, golden, alt)` this frame actually consumed,
    /// so a catalog ingest step can attach a minimal source hash to the
    /// produced frame name instead of the always-present superset (spec
    /// §4.1 "Dependency tracking").
    pub dependencies: DependencyTracker,
}

/// The VP8 decoder core. Holds the carried-forward entropy/segmentation/
/// filter-adjustment state and the three reference slots; `decompress`
/// advances it by exactly one frame.
pub struct Decoder {
    state: DecoderState,
    references: References,
}

impl Decoder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: DecoderState::new(width, height),
            references: References::blank(width, height),
        }
    }

    /// Restore a decoder to a previously serialized state and reference
    /// set, as required to resume decoding mid-stream from a catalog
    /// lookup (spec §4.3).
    pub fn restore(state: DecoderState, references: References) -> Self {
        Self { state, references }
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    /// The composite hash of this decoder's current state, used to name
    /// produced frames (spec §4.3).
    pub fn get_hash(&self) -> DecoderHash {
        DecoderHash::new(
            self.state.content_hash(),
            self.references.last.content_hash(),
            self.references.golden.content_hash(),
            self.references.alt.content_hash(),
        )
    }

    /// Decompress one compressed VP8 frame, advancing decoder state and
    /// producing a reconstructed raster plus updated reference set.
    #[instrument(skip(self, frame), fields(len = frame.len()))]
    pub fn decompress(&mut self, frame: &[u8], accept_partial: bool) -> Result<DecodedFrame> {
        let chunk = UncompressedChunk::parse(
            frame,
            self.state.width as u16,
            self.state.height as u16,
            accept_partial,
        )?;

        if chunk.corruption_level != CorruptionLevel::None {
            warn!(?chunk.corruption_level, "decompressing a corrupted chunk; substituting concealment state");
        }

        let mut dependencies = DependencyTracker::new();
        dependencies.mark_state();

        if chunk.key_frame {
            self.state.reset_to_keyframe_defaults();
        }

        let mut first_partition_decoder = BoolDecoder::new(chunk.first_partition());
        let header = FrameHeader::parse(&mut first_partition_decoder, chunk.key_frame)?;

        if let Some(seg) = header.segmentation() {
            self.state.segmentation = Some(seg.clone());
        } else if chunk.key_frame {
            self.state.segmentation = None;
        }
        if let Some(adj) = header.filter_adjustments() {
            self.state.filter_adjustments = Some(adj.clone());
        } else if chunk.key_frame {
            self.state.filter_adjustments = None;
        }

        // A working copy of the carried entropy tables: per-frame
        // intra-mode-probability and motion-vector-probability updates
        // apply only to this frame's decode, and persist back to
        // `self.state.entropy` only when the header says `refresh_entropy`.
        let mut entropy = self.state.entropy.clone();
        let (golden_sign_bias, alt_sign_bias, prob_inter, prob_references_last, prob_references_golden) = match &header {
            FrameHeader::Inter(inter) => {
                if let Some(probs) = inter.intra_16x16_prob {
                    entropy.y_mode_probs = probs;
                }
                if let Some(probs) = inter.intra_chroma_prob {
                    entropy.uv_mode_probs = probs;
                }
                for component in 0..2 {
                    for slot in 0..19 {
                        if let Some(new_prob) = inter.mv_prob_update[component][slot] {
                            set_mv_prob(&mut entropy.mv_probs[component], slot, new_prob);
                        }
                    }
                }
                (inter.golden_sign_bias, inter.alt_sign_bias, inter.prob_inter, inter.prob_references_last, inter.prob_references_golden)
            }
            FrameHeader::Key(_) => (false, false, 0, 0, 0),
        };

        let partitions = chunk.dct_partitions(header.partition_count())?;
        let mb_cols = self.state.width.div_ceil(16) as usize;
        let mb_rows = self.state.height.div_ceil(16) as usize;

        let references_used = if chunk.key_frame {
            None
        } else {
            Some(self.references.clone())
        };
        let safe_last = references_used.as_ref().map(|r| SafeRaster::build(r.last.raster()));
        let safe_golden = references_used.as_ref().map(|r| SafeRaster::build(r.golden.raster()));
        let safe_alt = references_used.as_ref().map(|r| SafeRaster::build(r.alt.raster()));

        let mut builder = MutableRasterHandle::new(Raster::new_filled(
            self.state.width,
            self.state.height,
            0,
            128,
            128,
        ));

        let mut filter_params = Vec::with_capacity(mb_cols * mb_rows);
        let mut skip_subblock = Vec::with_capacity(mb_cols * mb_rows);
        let quant = header.quant();

        let mut above_nz_cols = vec![[false; 9]; mb_cols];
        let segment_tree_probs = self.state.segmentation.as_ref().and_then(|s| s.tree_probs);
        let prob_skip_false = header.prob_skip_false();

        let mut above_headers: Vec<Option<MacroblockHeader>> = vec![None; mb_cols];

        for mb_row in 0..mb_rows {
            let partition = &partitions[mb_row % partitions.len()];
            let mut mb_decoder = BoolDecoder::new(partition);
            let mut left_nz = [false; 9];
            let mut left_header: Option<MacroblockHeader> = None;
            let mut above_left_header: Option<MacroblockHeader> = None;

            for mb_col in 0..mb_cols {
                let mb_idx = mb_row * mb_cols + mb_col;
                let mut segment_id = self.state.segment_map[mb_idx];

                let mut mb_header: MacroblockHeader = if chunk.key_frame {
                    read_keyframe_header(&mut first_partition_decoder, &mut segment_id, segment_tree_probs.as_ref(), prob_skip_false)
                } else {
                    let intra_16x16 = match &header {
                        FrameHeader::Inter(inter) => inter.intra_16x16_prob.as_ref(),
                        FrameHeader::Key(_) => None,
                    };
                    let intra_chroma = match &header {
                        FrameHeader::Inter(inter) => inter.intra_chroma_prob.as_ref(),
                        FrameHeader::Key(_) => None,
                    };
                    read_interframe_header(
                        &mut first_partition_decoder,
                        &mut segment_id,
                        segment_tree_probs.as_ref(),
                        prob_skip_false,
                        prob_inter,
                        prob_references_last,
                        prob_references_golden,
                        golden_sign_bias,
                        alt_sign_bias,
                        &entropy,
                        intra_16x16,
                        intra_chroma,
                        InterNeighbors {
                            above: above_headers[mb_col].as_ref(),
                            left: left_header.as_ref(),
                            above_left: above_left_header.as_ref(),
                        },
                        mb_col,
                        mb_row,
                        mb_cols,
                        mb_rows,
                    )
                };
                self.state.segment_map[mb_idx] = segment_id;

                if mb_header.is_inter {
                    match mb_header.reference {
                        ReferenceFrame::Last => dependencies.mark_last(),
                        ReferenceFrame::Golden => dependencies.mark_golden(),
                        ReferenceFrame::AltRef => dependencies.mark_alt(),
                    }
                }

                let segment_q = self.state.segmentation.as_ref().map(|s| {
                    let idx = mb_header.segment_id as usize;
                    (s.quantizer_update[idx] as i32, s.absolute_values)
                });
                let (seg_delta, seg_absolute) = segment_q.unwrap_or((0, false));
                let q_index = if seg_absolute {
                    seg_delta
                } else {
                    quant.y_ac_qi + seg_delta
                };
                let dequant = DequantFactors::new(
                    q_index,
                    quant.y_dc_delta,
                    quant.y2_dc_delta,
                    quant.y2_ac_delta,
                    quant.uv_dc_delta,
                    quant.uv_ac_delta,
                );

                // Y2 (the second-order DC transform) covers every
                // macroblock except B_PRED intra and SPLITMV inter, the
                // two modes that predict at sub-block granularity.
                let has_y2 = mb_header.y_mode != crate::modes::YMode::BPred
                    && !(mb_header.is_inter && mb_header.mv_mode == crate::modes::MvMode::Split);
                let residue = if mb_header.skip_coeff {
                    crate::macroblock::MacroblockResidue {
                        y: [[0; 16]; 16],
                        u: [[0; 16]; 4],
                        v: [[0; 16]; 4],
                        has_y2,
                        nonzero: [false; 25],
                    }
                } else {
                    read_residue(
                        &mut mb_decoder,
                        &entropy.coeff_probs,
                        &dequant,
                        has_y2,
                        &mut left_nz,
                        &mut above_nz_cols[mb_col],
                    )
                };
                mb_header.has_nonzero_residue = residue.nonzero.iter().any(|&nz| nz);

                let safe_ref = match mb_header.reference {
                    ReferenceFrame::Last => safe_last.as_ref(),
                    ReferenceFrame::Golden => safe_golden.as_ref(),
                    ReferenceFrame::AltRef => safe_alt.as_ref(),
                };

                reconstruct_macroblock(
                    &mb_header,
                    &residue,
                    builder.raster_mut(),
                    safe_ref,
                    mb_col,
                    mb_row,
                    &self.state,
                );

                let filter_level = resolve_filter_level(
                    header.filter_level(),
                    self.state
                        .segmentation
                        .as_ref()
                        .map(|s| s.filter_level_update[mb_header.segment_id as usize] as i32),
                    self.state.segmentation.as_ref().map(|s| s.absolute_values).unwrap_or(false),
                    None,
                    None,
                );
                filter_params.push(FilterParams {
                    level: filter_level,
                    sharpness: header.sharpness_level(),
                    filter_type: chunk.loop_filter_type,
                });
                skip_subblock.push(!mb_header.has_nonzero_residue && has_y2);

                above_left_header = above_headers[mb_col].take();
                above_headers[mb_col] = Some(mb_header.clone());
                left_header = Some(mb_header);
            }
        }

        if header.filter_level() > 0 {
            filter_plane(builder.raster_mut().y_mut(), 16, mb_cols, mb_rows, &filter_params, &skip_subblock);
            filter_plane(builder.raster_mut().u_mut(), 8, mb_cols, mb_rows, &filter_params, &skip_subblock);
            filter_plane(builder.raster_mut().v_mut(), 8, mb_cols, mb_rows, &filter_params, &skip_subblock);
        }

        let raster = builder.freeze();

        if header.refresh_entropy() {
            self.state.entropy = entropy;
        }

        let mut references = self.references.clone();
        if chunk.key_frame {
            references = References {
                last: raster.clone(),
                golden: raster.clone(),
                alt: raster.clone(),
                last_flag: true,
            };
        } else {
            match &header {
                FrameHeader::Inter(inter) => {
                    if inter.refresh_last {
                        references.last = raster.clone();
                    }
                    references.golden = match inter.copy_to_golden {
                        1 => references.last.clone(),
                        2 => references.alt.clone(),
                        _ if inter.refresh_golden => raster.clone(),
                        _ => references.golden,
                    };
                    references.alt = match inter.copy_to_alt {
                        1 => references.last.clone(),
                        2 => references.golden.clone(),
                        _ if inter.refresh_alt => raster.clone(),
                        _ => references.alt,
                    };
                }
                FrameHeader::Key(_) => unreachable!("key-frame branch handled above"),
            }
        }
        self.references = references.clone();

        debug!(mb_cols, mb_rows, key_frame = chunk.key_frame, "decompressed one frame");

        Ok(DecodedFrame {
            raster,
            show_frame: chunk.show_frame,
            references,
            state: self.state.clone(),
            dependencies,
        })
    }
}

/// Apply one bitstream-encoded motion-vector probability update slot
/// (`mv_prob_update`'s flat 0..19 index: 0 = is_short, 1 = sign, 2..9 =
/// short tree, 9..19 = long bits) to a component's probability table.
fn set_mv_prob(probs: &mut MvComponentProbs, slot: usize, value: u8) {
    match slot {
        0 => probs.is_short = value,
        1 => probs.sign = value,
        2..=8 => probs.short[slot - 2] = value,
        9..=18 => probs.bits[slot - 9] = value,
        _ => {}
    }
}

/// Construct an error-concealment substitute decoded frame when a chunk
/// could not be parsed at all, reusing the last good reference raster
/// (spec §4.1 error-concealment mode).
pub fn concealment_frame(decoder: &Decoder) -> DecodedFrame {
    let mut dependencies = DependencyTracker::new();
    dependencies.mark_state();
    dependencies.mark_last();
    DecodedFrame {
        raster: decoder.references.last.clone(),
        show_frame: true,
        references: decoder.references.clone(),
        state: decoder.state.clone(),
        dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructing_a_decoder_starts_with_blank_references() {
        let decoder = Decoder::new(16, 16);
        assert_eq!(decoder.references().last, decoder.references().golden);
    }

    #[test]
    fn rejects_frame_shorter_than_a_tag() {
        let mut decoder = Decoder::new(16, 16);
        let err = decoder.decompress(&[0, 1], false).unwrap_err();
        assert!(matches!(err, Error::Truncated { .. }));
    }
}
