//! Frame-level header parsing: the first-partition fields that precede
//! the per-macroblock mode/residue stream (spec §4.1 "Uncompressed-chunk
//! split", "Multi-partition DCT token streams").
//!
//! Grounded on `examples/original_source/src/decoder/frame_header.hh` /
//! `.cc`. Keyframe and interframe headers are distinct variants (spec §9
//! "Deep inheritance" redesign: a tagged enum instead of virtual dispatch
//! or CRTP).

use alfalfa_core::{FilterAdjustments, Segmentation};

use crate::bool_decoder::BoolDecoder;
use crate::error::Result;
use crate::uncompressed_chunk::LoopFilterType;

/// Quantizer indices and per-plane deltas, read once per frame.
#[derive(Debug, Clone, Copy)]
pub struct QuantIndices {
    pub y_ac_qi: i32,
    pub y_dc_delta: i32,
    pub y2_dc_delta: i32,
    pub y2_ac_delta: i32,
    pub uv_dc_delta: i32,
    pub uv_ac_delta: i32,
}

impl QuantIndices {
    fn parse(d: &mut BoolDecoder) -> Self {
        Self {
            y_ac_qi: d.get_literal(7) as i32,
            y_dc_delta: d.get_optional_signed_literal(4).unwrap_or(0),
            y2_dc_delta: d.get_optional_signed_literal(4).unwrap_or(0),
            y2_ac_delta: d.get_optional_signed_literal(4).unwrap_or(0),
            uv_dc_delta: d.get_optional_signed_literal(4).unwrap_or(0),
            uv_ac_delta: d.get_optional_signed_literal(4).unwrap_or(0),
        }
    }
}

/// Per-component motion-vector probability update, `None` where the
/// bitstream didn't touch that entry (spec §4.1 "entropy persistence").
pub type MvProbUpdate = [[Option<u8>; 19]; 2];

/// The fixed probability VP8 uses to gate every individual MV probability
/// update bit, distinct from the 128 (1/2) used for plain flags.
const MV_UPDATE_PROB: u8 = 252;

fn parse_mv_prob_update(d: &mut BoolDecoder) -> MvProbUpdate {
    let mut update = [[None; 19]; 2];
    for component in update.iter_mut() {
        for slot in component.iter_mut() {
            if d.get(MV_UPDATE_PROB) {
                let x = d.get_literal(7);
                *slot = Some(if x != 0 { (x << 1) as u8 } else { 1 });
            }
        }
    }
    update
}

/// Header fields specific to keyframes: color space and segmentation are
/// (re)established fresh, never carried across from a prior frame.
#[derive(Debug, Clone)]
pub struct KeyFrameHeader {
    pub color_space: u8,
    pub clamping_type: u8,
    pub segmentation: Option<Segmentation>,
    pub filter_type: LoopFilterType,
    pub filter_level: i32,
    pub sharpness_level: u8,
    pub filter_adjustments: Option<FilterAdjustments>,
    pub partition_count: u8,
    pub quant: QuantIndices,
    pub refresh_golden: bool,
    pub refresh_alt: bool,
    pub refresh_entropy: bool,
    pub refresh_last: bool,
    pub prob_skip_false: Option<u8>,
}

/// Header fields specific to interframes: which references to update and
/// which to sign-bias, on top of the fields shared with keyframes.
#[derive(Debug, Clone)]
pub struct InterFrameHeader {
    pub golden_sign_bias: bool,
    pub alt_sign_bias: bool,
    pub segmentation: Option<Segmentation>,
    pub filter_type: LoopFilterType,
    pub filter_level: i32,
    pub sharpness_level: u8,
    pub filter_adjustments: Option<FilterAdjustments>,
    pub partition_count: u8,
    pub quant: QuantIndices,
    pub refresh_golden: bool,
    pub refresh_alt: bool,
    pub refresh_entropy: bool,
    pub refresh_last: bool,
    pub copy_to_golden: u8,
    pub copy_to_alt: u8,
    pub prob_skip_false: Option<u8>,
    pub prob_inter: u8,
    pub prob_references_last: u8,
    pub prob_references_golden: u8,
    pub intra_16x16_prob: Option<[u8; 4]>,
    pub intra_chroma_prob: Option<[u8; 3]>,
    pub mv_prob_update: MvProbUpdate,
}

/// Tagged frame-header variant: spec §9 calls for this instead of a base
/// class with virtual `parse`/`setup_quantizer` methods.
#[derive(Debug, Clone)]
pub enum FrameHeader {
    Key(KeyFrameHeader),
    Inter(InterFrameHeader),
}

/// Parse the per-frame segmentation config. Only the tree probabilities
/// (not the per-macroblock segment ids themselves) live in the first
/// partition's frame header; segment ids are interleaved with each
/// macroblock's mode header in the macroblock loop (spec §4.1 "segment id
/// update").
fn parse_segmentation(d: &mut BoolDecoder) -> Option<Segmentation> {
    if !d.get(128) {
        return None;
    }
    let update_map = d.get(128);
    let update_data = d.get(128);
    let mut absolute_values = false;
    let mut quantizer_update = [0i8; 4];
    let mut filter_level_update = [0i8; 4];
    if update_data {
        absolute_values = d.get(128);
        for q in quantizer_update.iter_mut() {
            *q = d.get_optional_signed_literal(7).unwrap_or(0) as i8;
        }
        for f in filter_level_update.iter_mut() {
            *f = d.get_optional_signed_literal(6).unwrap_or(0) as i8;
        }
    }
    let tree_probs = if update_map {
        let mut probs = [255u8; 3];
        for p in probs.iter_mut() {
            if d.get(128) {
                *p = d.get_literal(8) as u8;
            }
        }
        Some(probs)
    } else {
        None
    };
    Some(Segmentation {
        absolute_values,
        quantizer_update,
        filter_level_update,
        tree_probs,
    })
}

fn parse_filter_adjustments(d: &mut BoolDecoder) -> Option<FilterAdjustments> {
    if !d.get(128) {
        return None;
    }
    let mut ref_frame_delta = [0i8; 4];
    let mut mode_delta = [0i8; 4];
    for r in ref_frame_delta.iter_mut() {
        *r = d.get_optional_signed_literal(6).unwrap_or(0) as i8;
    }
    for m in mode_delta.iter_mut() {
        *m = d.get_optional_signed_literal(6).unwrap_or(0) as i8;
    }
    Some(FilterAdjustments {
        ref_frame_delta,
        mode_delta,
    })
}

impl FrameHeader {
    /// Parse the frame header from the first partition. `key_frame` picks
    /// the variant.
    pub fn parse(d: &mut BoolDecoder, key_frame: bool) -> Result<Self> {
        let (color_space, clamping_type) = if key_frame {
            (d.get_literal(1) as u8, d.get_literal(1) as u8)
        } else {
            (0, 0)
        };

        let segmentation = parse_segmentation(d);
        // This bit is the compressed-header echo of the same filter-type
        // choice `UncompressedChunk` already rejected Simple for via the
        // frame tag's version field; still has to be consumed to keep the
        // bitstream in sync for the fields that follow.
        let filter_type = if d.get_literal(1) == 1 {
            LoopFilterType::Simple
        } else {
            LoopFilterType::Normal
        };
        let filter_level = d.get_literal(6) as i32;
        let sharpness_level = d.get_literal(3) as u8;
        let filter_adjustments = parse_filter_adjustments(d);
        let partition_count = 1u8 << d.get_literal(2) as u8;
        let quant = QuantIndices::parse(d);

        let (refresh_golden, refresh_alt, copy_to_golden, copy_to_alt, golden_sign_bias, alt_sign_bias) = if key_frame {
            (true, true, 0, 0, false, false)
        } else {
            let refresh_golden = d.get(128);
            let refresh_alt = d.get(128);
            let copy_to_golden = if !refresh_golden { d.get_literal(2) as u8 } else { 0 };
            let copy_to_alt = if !refresh_alt { d.get_literal(2) as u8 } else { 0 };
            let golden_sign_bias = d.get(128);
            let alt_sign_bias = d.get(128);
            (refresh_golden, refresh_alt, copy_to_golden, copy_to_alt, golden_sign_bias, alt_sign_bias)
        };

        let refresh_entropy = d.get(128);
        let refresh_last = if key_frame { true } else { d.get(128) };

        // Coefficient-probability-update parsing is not implemented yet
        // (bitstream-level token probability adaptation); every frame
        // decodes against the carried/default coefficient table.

        let prob_skip_false = if d.get(128) { Some(d.get_literal(8) as u8) } else { None };

        if key_frame {
            Ok(FrameHeader::Key(KeyFrameHeader {
                color_space,
                clamping_type,
                segmentation,
                filter_type,
                filter_level,
                sharpness_level,
                filter_adjustments,
                partition_count,
                quant,
                refresh_golden,
                refresh_alt,
                refresh_entropy,
                refresh_last,
                prob_skip_false,
            }))
        } else {
            let prob_inter = d.get_literal(8) as u8;
            let prob_references_last = d.get_literal(8) as u8;
            let prob_references_golden = d.get_literal(8) as u8;
            let intra_16x16_prob = if d.get(128) {
                Some([d.get_literal(8) as u8, d.get_literal(8) as u8, d.get_literal(8) as u8, d.get_literal(8) as u8])
            } else {
                None
            };
            let intra_chroma_prob = if d.get(128) {
                Some([d.get_literal(8) as u8, d.get_literal(8) as u8, d.get_literal(8) as u8])
            } else {
                None
            };
            let mv_prob_update = parse_mv_prob_update(d);

            Ok(FrameHeader::Inter(InterFrameHeader {
                golden_sign_bias,
                alt_sign_bias,
                segmentation,
                filter_type,
                filter_level,
                sharpness_level,
                filter_adjustments,
                partition_count,
                quant,
                refresh_golden,
                refresh_alt,
                refresh_entropy,
                refresh_last,
                copy_to_golden,
                copy_to_alt,
                prob_skip_false,
                prob_inter,
                prob_references_last,
                prob_references_golden,
                intra_16x16_prob,
                intra_chroma_prob,
                mv_prob_update,
            }))
        }
    }

    pub fn partition_count(&self) -> u8 {
        match self {
            FrameHeader::Key(k) => k.partition_count,
            FrameHeader::Inter(i) => i.partition_count,
        }
    }

    pub fn quant(&self) -> &QuantIndices {
        match self {
            FrameHeader::Key(k) => &k.quant,
            FrameHeader::Inter(i) => &i.quant,
        }
    }

    pub fn filter_level(&self) -> i32 {
        match self {
            FrameHeader::Key(k) => k.filter_level,
            FrameHeader::Inter(i) => i.filter_level,
        }
    }

    pub fn sharpness_level(&self) -> u8 {
        match self {
            FrameHeader::Key(k) => k.sharpness_level,
            FrameHeader::Inter(i) => i.sharpness_level,
        }
    }

    pub fn segmentation(&self) -> Option<&Segmentation> {
        match self {
            FrameHeader::Key(k) => k.segmentation.as_ref(),
            FrameHeader::Inter(i) => i.segmentation.as_ref(),
        }
    }

    pub fn filter_adjustments(&self) -> Option<&FilterAdjustments> {
        match self {
            FrameHeader::Key(k) => k.filter_adjustments.as_ref(),
            FrameHeader::Inter(i) => i.filter_adjustments.as_ref(),
        }
    }

    pub fn refresh_entropy(&self) -> bool {
        match self {
            FrameHeader::Key(k) => k.refresh_entropy,
            FrameHeader::Inter(i) => i.refresh_entropy,
        }
    }

    pub fn prob_skip_false(&self) -> Option<u8> {
        match self {
            FrameHeader::Key(k) => k.prob_skip_false,
            FrameHeader::Inter(i) => i.prob_skip_false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframe_header_parses_without_panic() {
        let data = [0u8; 16];
        let mut d = BoolDecoder::new(&data);
        let header = FrameHeader::parse(&mut d, true).unwrap();
        assert!(matches!(header, FrameHeader::Key(_)));
        assert!(header.partition_count() >= 1);
    }

    #[test]
    fn interframe_header_parses_without_panic() {
        let data = [0u8; 16];
        let mut d = BoolDecoder::new(&data);
        let header = FrameHeader::parse(&mut d, false).unwrap();
        assert!(matches!(header, FrameHeader::Inter(_)));
    }

    #[test]
    fn interframe_header_reads_reference_selection_probabilities() {
        // All-0xff bytes drive every flag bit true, exercising the
        // optional intra_16x16_prob/intra_chroma_prob/mv_prob_update arms.
        let data = [0xffu8; 32];
        let mut d = BoolDecoder::new(&data);
        let header = FrameHeader::parse(&mut d, false).unwrap();
        match header {
            FrameHeader::Inter(inter) => {
                assert!(inter.intra_16x16_prob.is_some());
                assert!(inter.intra_chroma_prob.is_some());
            }
            FrameHeader::Key(_) => panic!("expected an interframe header"),
        }
    }
}
